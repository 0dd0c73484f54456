/// A named enumeration. The position of each value in `values` is its tag.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Enumeration {
    name: String,
    values: Vec<String>,
}

impl Enumeration {
    pub fn new<I, S>(name: impl Into<String>, values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            name: name.into(),
            values: values.into_iter().map(Into::into).collect(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn values(&self) -> &[String] {
        &self.values
    }

    /// Values paired with their zero-based tags, in declared order.
    pub fn tagged(&self) -> impl Iterator<Item = (usize, &str)> {
        self.values.iter().enumerate().map(|(i, v)| (i, v.as_str()))
    }
}
