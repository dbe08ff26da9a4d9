//! Template compilation and execution

use crate::error::GrammarError;
use regex::Regex;

/// One declared capture value
#[derive(Debug, Clone)]
struct Value {
    name: String,
    /// Pattern text without the declaration's outer parentheses
    pattern: String,
    filldown: bool,
}

/// What happens after a rule matches a line
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Action {
    /// Keep filling the current row
    Continue,
    /// Emit the current row and clear non-Filldown values
    Record,
}

/// One compiled rule from the `Start` section
#[derive(Debug)]
struct Rule {
    regex: Regex,
    action: Action,
}

/// A compiled template body, ready to run over raw text
#[derive(Debug)]
pub struct GrammarTemplate {
    values: Vec<Value>,
    rules: Vec<Rule>,
}

/// Tabular output of one template run: a header row plus data rows
///
/// Every data row has exactly `header.len()` cells; values never captured
/// for a row come back as empty strings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Table {
    /// Declared value names, in declaration order
    pub header: Vec<String>,
    /// Extracted rows, in emission order
    pub rows: Vec<Vec<String>>,
}

impl GrammarTemplate {
    /// Compile a template body
    ///
    /// The body must declare at least one `Value` and open a `Start`
    /// section; blank lines and `#` comments are ignored throughout.
    pub fn compile(source: &str) -> Result<Self, GrammarError> {
        let mut values: Vec<Value> = Vec::new();
        let mut rules: Vec<Rule> = Vec::new();
        let mut in_rules = false;
        let mut saw_content = false;

        for (idx, raw_line) in source.lines().enumerate() {
            let line = raw_line.trim();
            if line.is_empty() || line.starts_with('#') {
                continue;
            }
            saw_content = true;
            let line_no = idx + 1;

            if !in_rules {
                if line == "Start" {
                    in_rules = true;
                } else if let Some(rest) = line.strip_prefix("Value ") {
                    let value = parse_value(rest).ok_or_else(|| GrammarError::Syntax {
                        line: line_no,
                        message: "expected `Value [Filldown] NAME (PATTERN)`".to_string(),
                    })?;
                    values.push(value);
                } else {
                    return Err(GrammarError::Syntax {
                        line: line_no,
                        message: "expected value declaration or Start".to_string(),
                    });
                }
                continue;
            }

            if !line.starts_with('^') {
                return Err(GrammarError::Syntax {
                    line: line_no,
                    message: "rule pattern must start with ^".to_string(),
                });
            }
            let (pattern, action) = split_action(line, line_no)?;
            let interpolated = interpolate(pattern, &values, line_no)?;
            rules.push(Rule {
                regex: Regex::new(&interpolated)?,
                action,
            });
        }

        if !saw_content {
            return Err(GrammarError::EmptyBody);
        }
        if values.is_empty() {
            return Err(GrammarError::NoValues);
        }
        if !in_rules {
            return Err(GrammarError::MissingStart);
        }

        Ok(Self { values, rules })
    }

    /// Declared value names, in declaration order
    pub fn header(&self) -> Vec<String> {
        self.values.iter().map(|v| v.name.clone()).collect()
    }

    /// Run the template over raw text
    ///
    /// Each input line is tested against the rules in order and the first
    /// match wins. A partially filled row left at end of input is emitted.
    pub fn parse(&self, text: &str) -> Table {
        let mut rows: Vec<Vec<String>> = Vec::new();
        let mut current: Vec<Option<String>> = vec![None; self.values.len()];

        for line in text.lines() {
            for rule in &self.rules {
                let Some(caps) = rule.regex.captures(line) else {
                    continue;
                };
                for (i, value) in self.values.iter().enumerate() {
                    if let Some(m) = caps.name(&value.name) {
                        current[i] = Some(m.as_str().to_string());
                    }
                }
                if rule.action == Action::Record {
                    rows.push(materialize(&current));
                    for (i, value) in self.values.iter().enumerate() {
                        if !value.filldown {
                            current[i] = None;
                        }
                    }
                }
                break;
            }
        }

        // Filldown leftovers alone do not make a row
        let pending = self
            .values
            .iter()
            .zip(&current)
            .any(|(v, slot)| !v.filldown && slot.is_some());
        if pending {
            rows.push(materialize(&current));
        }

        Table {
            header: self.header(),
            rows,
        }
    }
}

fn materialize(current: &[Option<String>]) -> Vec<String> {
    current
        .iter()
        .map(|slot| slot.clone().unwrap_or_default())
        .collect()
}

/// Parse the remainder of a `Value` declaration line
fn parse_value(rest: &str) -> Option<Value> {
    let rest = rest.trim();
    let (filldown, rest) = match rest.strip_prefix("Filldown ") {
        Some(r) => (true, r.trim_start()),
        None => (false, rest),
    };

    let (name, pattern) = rest.split_once(char::is_whitespace)?;
    if name.is_empty() || !name.chars().all(|c| c.is_ascii_alphanumeric() || c == '_') {
        return None;
    }

    let pattern = pattern.trim();
    let inner = pattern.strip_prefix('(')?.strip_suffix(')')?;
    Some(Value {
        name: name.to_string(),
        pattern: inner.to_string(),
        filldown,
    })
}

/// Split an optional ` -> ACTION` suffix off a rule line
fn split_action(line: &str, line_no: usize) -> Result<(&str, Action), GrammarError> {
    let Some((pattern, action)) = line.rsplit_once(" -> ") else {
        return Ok((line, Action::Continue));
    };
    match action.trim() {
        "Record" => Ok((pattern.trim_end(), Action::Record)),
        "Next" => Ok((pattern.trim_end(), Action::Continue)),
        other => Err(GrammarError::Syntax {
            line: line_no,
            message: format!("unknown action '{other}'"),
        }),
    }
}

/// Expand `${NAME}` references into named capture groups
fn interpolate(pattern: &str, values: &[Value], line_no: usize) -> Result<String, GrammarError> {
    let mut out = String::with_capacity(pattern.len());
    let mut rest = pattern;

    while let Some(start) = rest.find("${") {
        out.push_str(&rest[..start]);
        let after = &rest[start + 2..];
        let Some(end) = after.find('}') else {
            return Err(GrammarError::Syntax {
                line: line_no,
                message: "unclosed ${ reference".to_string(),
            });
        };
        let name = &after[..end];
        let value = values
            .iter()
            .find(|v| v.name == name)
            .ok_or_else(|| GrammarError::UnknownValue(name.to_string()))?;
        out.push_str(&format!("(?P<{}>{})", value.name, value.pattern));
        rest = &after[end + 1..];
    }

    out.push_str(rest);
    Ok(out)
}
