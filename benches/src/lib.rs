pub mod context;
#[cfg(test)]
mod tests;

/// The template used by the benchmarks.
pub const BLOG: &str = include_str!("../benchdata/blog.html");

/// Repeat the template source `n` times.
pub fn repeat(source: &str, n: usize) -> String {
    let mut s = String::with_capacity(source.len() * n);
    for _ in 0..n {
        s.push_str(source);
    }
    s
}
