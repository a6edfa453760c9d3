use serde::Deserialize;

/// One page of a listing.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Paginated<T> {
    pub count: u64,
    #[serde(default)]
    pub next: Option<String>,
    #[serde(default)]
    pub previous: Option<String>,
    pub results: Vec<T>,
}

impl<T> Paginated<T> {
    /// Whether another page follows this one.
    pub fn has_next(&self) -> bool {
        self.next.is_some()
    }
}
