use utoipa::IntoParams;

/// Query parameters for create and update.
///
/// Missing parameters bind to the empty string. Keys match case-insensitively
/// and a repeated key binds its first occurrence.
#[derive(Debug, Default, PartialEq, Eq, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct ResourceQuery {
    /// The name of the resource.
    pub name: String,
    /// The value of the resource.
    pub value: String,
}

impl ResourceQuery {
    /// Bind from raw query pairs, as extracted by `Query<Vec<(String, String)>>`.
    pub fn from_pairs(pairs: Vec<(String, String)>) -> Self {
        let mut name = None;
        let mut value = None;

        for (key, val) in pairs {
            if key.eq_ignore_ascii_case("name") {
                name.get_or_insert(val);
            } else if key.eq_ignore_ascii_case("value") {
                value.get_or_insert(val);
            }
        }

        ResourceQuery {
            name: name.unwrap_or_default(),
            value: value.unwrap_or_default(),
        }
    }
}
