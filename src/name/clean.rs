//! Prefix stripping and slash normalization.

/// Drop `drop` leading `/`-separated components from `name` and collapse any
/// run of slashes into one.
///
/// A name with fewer components than `drop` keeps its last component.
pub fn clean_name(name: &str, drop: usize) -> String {
    let mut drop = drop;
    let mut out = String::with_capacity(name.len());
    let mut chars = name.chars().peekable();

    while let Some(c) = chars.next() {
        if c == '/' {
            if chars.peek() == Some(&'/') {
                continue;
            }
            if drop > 0 {
                drop -= 1;
                out.clear();
                continue;
            }
        }
        out.push(c);
    }
    out
}
