use indexmap::IndexSet;

/// Lines accepted so far, in order of first occurrence.
#[derive(Debug, Default)]
pub struct SeenLines {
    lines: IndexSet<String>,
}

impl SeenLines {
    pub fn new() -> SeenLines {
        SeenLines {
            lines: IndexSet::new(),
        }
    }

    /// Returns `true` if `line` was not seen before. Empty lines are never stored.
    pub fn insert(&mut self, line: &str) -> bool {
        // look up by &str first so duplicates never allocate
        if line.is_empty() || self.lines.contains(line) {
            return false;
        }
        self.lines.insert(line.to_owned())
    }

    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.lines.iter().map(String::as_str)
    }
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Summary {
    pub read: u64,
    pub blank: u64,
    pub duplicates: u64,
    pub kept: u64,
}
