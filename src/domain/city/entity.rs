/// City names returned for a country, in upstream order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CityList {
    pub names: Vec<String>,
}

impl CityList {
    pub fn new(names: Vec<String>) -> Self {
        Self { names }
    }

    /// Sort ordinally and keep at most `limit` entries.
    ///
    /// A limit larger than the list keeps everything.
    pub fn sorted_and_limited(mut self, limit: Option<usize>) -> Vec<String> {
        self.names.sort();
        if let Some(limit) = limit {
            self.names.truncate(limit);
        }
        self.names
    }
}
