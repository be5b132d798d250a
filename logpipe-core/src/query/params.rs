use crate::pipeline::StageSpec;
use crate::query::QueryError;
use std::collections::HashMap;

/// Decoded `application/x-www-form-urlencoded` parameters.
///
/// The first occurrence of a key wins.
#[derive(Debug, Default, Clone)]
pub struct QueryParams {
    values: HashMap<String, String>,
}

impl QueryParams {
    pub fn parse(raw: &str) -> Self {
        let mut params = Self::default();
        params.merge(raw);
        params
    }

    /// Adds keys from `raw` that are not already present.
    pub fn merge(&mut self, raw: &str) {
        for (key, value) in url::form_urlencoded::parse(raw.as_bytes()) {
            self.values
                .entry(key.into_owned())
                .or_insert_with(|| value.into_owned());
        }
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.values.get(name).map(String::as_str)
    }

    fn first_of(&self, names: &[&str]) -> Option<&str> {
        names.iter().find_map(|name| self.get(name))
    }
}

/// A validated request: which file to read and the two stages to run on it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Query {
    pub file_name: String,
    pub command1: String,
    pub value1: String,
    pub command2: String,
    pub value2: String,
}

impl Query {
    pub fn from_params(params: &QueryParams) -> Result<Self, QueryError> {
        let file_name = required(params, "fileName", &["file_name"])?;
        if file_name.is_empty() {
            return Err(QueryError::InvalidParam {
                name: "fileName",
                reason: "must not be empty".to_string(),
            });
        }

        Ok(Self {
            file_name,
            command1: required(params, "command1", &["cmd1"])?,
            value1: required(params, "value1", &[])?,
            command2: required(params, "command2", &["cmd2"])?,
            value2: required(params, "value2", &[])?,
        })
    }

    pub fn first_stage(&self) -> StageSpec<'_> {
        StageSpec::new(&self.command1, &self.value1)
    }

    pub fn second_stage(&self) -> StageSpec<'_> {
        StageSpec::new(&self.command2, &self.value2)
    }
}

fn required(
    params: &QueryParams,
    name: &'static str,
    aliases: &[&str],
) -> Result<String, QueryError> {
    params
        .get(name)
        .or_else(|| params.first_of(aliases))
        .map(str::to_owned)
        .ok_or(QueryError::MissingParam { name })
}
