// Benchmark helper functions - Rust's dead code analysis doesn't understand
// that these are used by benchmark files in the same directory
// See: https://users.rust-lang.org/t/cargo-rustc-benches-awarnings/110111/2
#[allow(dead_code)]
pub fn generate_linked_text(size: usize) -> String {
    let base = "Some text with a [node title], a [root[user]] link, [Discussion[42]], \
                [My Post[by author]], [shown|target] and [https://everything2.com|E2]. ";
    base.repeat(size)
}

/// Inputs that make a backtracking nested-bracket regex blow up.
#[allow(dead_code)]
pub fn generate_adversarial(size: usize) -> Vec<String> {
    vec![
        "[".repeat(size),
        "[a".repeat(size),
        format!("[{}", "a[b]".repeat(size)),
        "[[]".repeat(size),
    ]
}
