// This binary crate is intentionally minimal.
// All classifier logic lives in the library (src/lib.rs and its modules).
// Run the demo with:
//   cargo run --example blobs
fn main() {
    println!("softgrad: softmax cross-entropy loss and gradient, from scratch in Rust.");
    println!("Run `cargo run --example blobs` to see the two-cluster demo.");
}
