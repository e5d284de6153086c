//! Ingredient block parsing and serving-size scaling.
//!
//! A recipe stores its ingredients as one newline-delimited text block.
//! Lines of the form `[Marinade]` open a named subgroup; everything else
//! is an ingredient line that may start with a numeric quantity.

use serde::Serialize;

/// One ingredient subgroup in source order. The leading group has no name.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct IngredientGroup {
    pub name: Option<String>,
    pub items: Vec<String>,
}

/// Split an ingredient block into subgroups.
///
/// A line whose entire trimmed content is `[Name]` starts a new group and
/// flushes the previous one; groups that never receive an item (a header
/// directly followed by another header or the end of input) are dropped.
/// Items before the first header land in an implicit unnamed group.
pub fn parse_groups(text: &str) -> Vec<IngredientGroup> {
    let mut groups = Vec::new();
    let mut current = IngredientGroup {
        name: None,
        items: Vec::new(),
    };

    for line in text.lines() {
        let trimmed = line.trim();
        if trimmed.is_empty() {
            continue;
        }
        if let Some(name) = group_header(trimmed) {
            if !current.items.is_empty() {
                groups.push(current);
            }
            current = IngredientGroup {
                name: Some(name.to_string()),
                items: Vec::new(),
            };
        } else {
            current.items.push(trimmed.to_string());
        }
    }

    if !current.items.is_empty() {
        groups.push(current);
    }

    groups
}

fn group_header(line: &str) -> Option<&str> {
    let name = line.strip_prefix('[')?.strip_suffix(']')?;
    if name.is_empty() {
        None
    } else {
        Some(name)
    }
}

/// Rescale the leading quantity of a single ingredient line.
///
/// Accepted quantity forms are a decimal with `.` or `,` as separator and
/// simple fractions like `1/2`. Lines without a parseable leading quantity
/// ("zout naar smaak") pass through unchanged. A multiplier of exactly 1
/// returns the input verbatim so an unscaled view never reformats the
/// author's own notation.
pub fn scale_line(line: &str, multiplier: f64) -> String {
    if multiplier == 1.0 {
        return line.to_string();
    }

    let token_end = line
        .find(|c: char| !(c.is_ascii_digit() || matches!(c, '.' | ',' | '/')))
        .unwrap_or(line.len());
    let token = &line[..token_end];
    let rest = &line[token_end..];

    match parse_quantity(token) {
        Some(amount) => format!("{}{}", format_amount(amount * multiplier), rest),
        None => line.to_string(),
    }
}

/// Parse all groups of an ingredient block and rescale every line from the
/// recipe's baseline serving count to the requested one.
pub fn scaled_groups(text: &str, target_servings: i32, base_servings: i32) -> Vec<IngredientGroup> {
    let multiplier = f64::from(target_servings) / f64::from(base_servings);
    let mut groups = parse_groups(text);
    for group in &mut groups {
        for item in &mut group.items {
            *item = scale_line(item, multiplier);
        }
    }
    groups
}

fn parse_quantity(token: &str) -> Option<f64> {
    if token.is_empty() {
        return None;
    }
    if let Some((numerator, denominator)) = token.split_once('/') {
        let n: f64 = numerator.replace(',', ".").parse().ok()?;
        let d: f64 = denominator.replace(',', ".").parse().ok()?;
        if d == 0.0 {
            return None;
        }
        Some(n / d)
    } else {
        token.replace(',', ".").parse().ok()
    }
}

/// Whole results print as integers, everything else with one decimal and a
/// comma separator ("1,5").
fn format_amount(value: f64) -> String {
    if (value - value.round()).abs() < 1e-9 {
        format!("{}", value.round() as i64)
    } else {
        format!("{:.1}", value).replace('.', ",")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn group(name: Option<&str>, items: &[&str]) -> IngredientGroup {
        IngredientGroup {
            name: name.map(String::from),
            items: items.iter().map(|s| s.to_string()).collect(),
        }
    }

    #[test]
    fn test_parse_flat_block() {
        let groups = parse_groups("250 gr spaghetti\n2 eieren\nzout");
        assert_eq!(
            groups,
            vec![group(None, &["250 gr spaghetti", "2 eieren", "zout"])]
        );
    }

    #[test]
    fn test_parse_named_groups() {
        let groups = parse_groups("boter\n[Marinade]\nsojasaus\ngember");
        assert_eq!(
            groups,
            vec![
                group(None, &["boter"]),
                group(Some("Marinade"), &["sojasaus", "gember"]),
            ]
        );
    }

    #[test]
    fn test_empty_trailing_group_is_dropped() {
        let groups = parse_groups("boter\n[Marinade]\nsojasaus\n[EmptyGroup]");
        assert_eq!(
            groups,
            vec![
                group(None, &["boter"]),
                group(Some("Marinade"), &["sojasaus"]),
            ]
        );
    }

    #[test]
    fn test_consecutive_headers_keep_only_filled_groups() {
        let groups = parse_groups("[Deeg]\n[Vulling]\nappels");
        assert_eq!(groups, vec![group(Some("Vulling"), &["appels"])]);
    }

    #[test]
    fn test_blank_lines_and_indentation_ignored() {
        let groups = parse_groups("\n  250 gr bloem  \n\n[Topping]\n  suiker\n");
        assert_eq!(
            groups,
            vec![
                group(None, &["250 gr bloem"]),
                group(Some("Topping"), &["suiker"]),
            ]
        );
    }

    #[test]
    fn test_empty_brackets_are_an_item() {
        // "[]" has no name, so it is not a header.
        let groups = parse_groups("[]");
        assert_eq!(groups, vec![group(None, &["[]"])]);
    }

    #[test]
    fn test_scale_whole_number() {
        assert_eq!(scale_line("2 eieren", 2.0), "4 eieren");
    }

    #[test]
    fn test_scale_fraction() {
        assert_eq!(scale_line("1/2 citroen", 3.0), "1,5 citroen");
    }

    #[test]
    fn test_scale_comma_decimal() {
        assert_eq!(scale_line("2,5 dl melk", 2.0), "5 dl melk");
    }

    #[test]
    fn test_scale_dot_decimal() {
        assert_eq!(scale_line("0.5 tl zout", 3.0), "1,5 tl zout");
    }

    #[test]
    fn test_quantityless_line_passes_through() {
        assert_eq!(scale_line("zout naar smaak", 2.0), "zout naar smaak");
        assert_eq!(scale_line("verse basilicum", 0.5), "verse basilicum");
    }

    #[test]
    fn test_multiplier_one_is_identity() {
        // Byte-for-byte, including separator style the general path would
        // otherwise rewrite.
        assert_eq!(scale_line("1.5 dl room", 1.0), "1.5 dl room");
        assert_eq!(scale_line("  rare spacing  ", 1.0), "  rare spacing  ");
    }

    #[test]
    fn test_malformed_quantity_left_alone() {
        assert_eq!(scale_line("//2 gr iets", 2.0), "//2 gr iets");
        assert_eq!(scale_line("1/0 snufje", 2.0), "1/0 snufje");
        assert_eq!(scale_line(",, vreemd", 2.0), ",, vreemd");
    }

    #[test]
    fn test_scaled_groups_applies_multiplier() {
        let groups = scaled_groups("2 eieren\n[Saus]\n1/2 citroen", 8, 4);
        assert_eq!(
            groups,
            vec![
                group(None, &["4 eieren"]),
                group(Some("Saus"), &["1 citroen"]),
            ]
        );
    }

    #[test]
    fn test_scaling_down() {
        assert_eq!(scale_line("3 uien", 1.0 / 3.0), "1 uien");
        assert_eq!(scale_line("500 gr gehakt", 0.5), "250 gr gehakt");
    }
}
