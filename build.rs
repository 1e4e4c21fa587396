fn main() {
    // embuild only has work to do when the firmware is built against ESP-IDF.
    if std::env::var("CARGO_FEATURE_ESPIDF").is_ok() {
        embuild::espidf::sysenv::output();
    }
}
