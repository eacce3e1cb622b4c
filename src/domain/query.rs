#[cfg_attr(test, derive(PartialEq))]
#[derive(Clone, Debug)]
pub struct CardQuery {
    name: String,
    edition: Option<String>,
    exact_match: bool,
}

impl CardQuery {
    #[must_use]
    pub fn new(name: &str, edition: &str, exact_match: bool) -> Self {
        let edition = edition.trim();
        Self {
            name: name.to_string(),
            edition: (!edition.is_empty()).then(|| edition.to_string()),
            exact_match,
        }
    }

    /// The same query without the exact phrase marker. Set scoping is kept.
    #[must_use]
    pub fn relaxed(&self) -> Self {
        Self {
            exact_match: false,
            ..self.clone()
        }
    }

    /// Builds the value of the `q` search parameter.
    ///
    /// The set clause is space separated, which form encodes as `+set:<code>`.
    #[must_use]
    pub fn search_string(&self) -> String {
        let name = if self.exact_match {
            format!("!\"{}\"", self.name)
        } else {
            self.name.clone()
        };

        match &self.edition {
            Some(edition) => format!("{name} set:{edition}"),
            None => name,
        }
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub fn edition(&self) -> Option<&str> {
        self.edition.as_deref()
    }

    #[must_use]
    pub fn exact_match(&self) -> bool {
        self.exact_match
    }
}
