use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

/// Page window of a listing.
#[derive(
    IntoParams, Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize,
)]
#[serde(rename_all = "camelCase")]
#[into_params(parameter_in = Query)]
pub struct Paginated {
    /// The first item to return, skipping all that come before it.
    #[serde(default)]
    pub skip: u64,
    /// The maximum number of entries to return.
    #[serde(default = "default::take")]
    #[param(minimum = 1, default = 50)]
    pub take: u64,
}

mod default {
    pub const fn take() -> u64 {
        50
    }
}

impl Default for Paginated {
    fn default() -> Self {
        Self {
            skip: 0,
            take: default::take(),
        }
    }
}

#[derive(ToSchema, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaginatedResults<R> {
    pub items: Vec<R>,
    pub total: u64,
}

#[cfg(test)]
mod test {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(r#"{}"#, Paginated { skip: 0, take: 50 })]
    #[case(r#"{"skip": 10}"#, Paginated { skip: 10, take: 50 })]
    #[case(r#"{"skip": 10, "take": 5}"#, Paginated { skip: 10, take: 5 })]
    fn defaults(#[case] input: &str, #[case] expected: Paginated) {
        let paginated: Paginated = serde_json::from_str(input).expect("must parse");
        assert_eq!(paginated, expected);
    }
}
