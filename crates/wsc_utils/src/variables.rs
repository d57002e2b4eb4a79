use anyhow::{Result, bail};

/// Parses `name=value` pairs in the order they were given. Only the first `=`
/// separates the name from the value, so values may contain `=` themselves.
pub fn parse_variables(variables: &[String]) -> Result<Vec<(String, String)>> {
    parse_variables_iter(variables.iter().map(String::as_str))
}

pub fn parse_variables_iter<'a>(
    variables: impl Iterator<Item = &'a str>,
) -> Result<Vec<(String, String)>> {
    let mut parsed = vec![];
    for v in variables {
        let Some((name, value)) = v.split_once('=') else {
            bail!("invalid variable `{v}`, expected the format name=value");
        };
        if name.trim().is_empty() {
            bail!("invalid variable `{v}`, the name is empty");
        }
        parsed.push((name.trim().to_owned(), value.to_owned()));
    }
    Ok(parsed)
}
