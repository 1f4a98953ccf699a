use crate::domain::entities::record::FieldSet;

/// Parse `field=value; field=value` into a field set. Fields not mentioned stay empty.
pub fn parse_field_args<F: FieldSet>(input: &str) -> Result<F, String> {
    let mut fields = F::default();
    for pair in input.split(';') {
        let pair = pair.trim();
        if pair.is_empty() {
            continue;
        }
        let (name, value) = pair
            .split_once('=')
            .ok_or_else(|| format!("Expected field=value, got '{}'", pair))?;
        fields.set(name.trim(), value.trim().to_string())?;
    }
    Ok(fields)
}
