#![no_main]

use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    let s = String::from_utf8_lossy(data);

    let Ok(result) = variantkit::load(&s) else {
        return;
    };

    let yaml = match variantkit::serialize(&result.document) {
        Ok(y) => y,
        Err(_) => return,
    };

    // A loaded document must survive serialize → parse unchanged.
    match variantkit::parse(&yaml) {
        Ok(back) if back == result.document => {}
        other => panic!(
            "Roundtrip failure.\nInput (lossy): {:?}\nSerialized YAML:\n{}\nReparsed: {:?}",
            s.get(..200).unwrap_or(&s),
            yaml.get(..500).unwrap_or(&yaml),
            other,
        ),
    }
});
