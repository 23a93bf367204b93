/// Custom uniffi-bindgen binary for generating language bindings.
///
/// Generates Swift/Kotlin bindings from the compiled shelf-uniffi cdylib.
///
/// Usage:
///   cargo run -p shelf-uniffi --features cli --bin shelf-uniffi-bindgen -- \
///     generate --library -l swift -o bindings/swift \
///     target/release/libshelf_uniffi.dylib
fn main() {
    uniffi::uniffi_bindgen_main();
}
