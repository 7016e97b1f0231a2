//! Best-effort resolution of parameter type annotations.
//!
//! Annotations are parsed as small type expressions: identifiers (optionally
//! dotted), generic applications such as `dict[str, int]`, and unions joined
//! with `|`. Common aliases are normalized. Anything that does not parse
//! resolves to [`ANY_TYPE`]; resolution never fails.

use std::iter::Peekable;
use std::vec::IntoIter;

/// Sentinel label for parameters whose type is absent or unresolvable.
pub const ANY_TYPE: &str = "Any";

/// Deepest generic nesting accepted before an annotation resolves to `Any`.
pub const MAX_NESTING_DEPTH: usize = 32;

/// Resolves an optional annotation into a canonical type label.
#[must_use]
pub fn resolve_type_label(annotation: Option<&str>) -> String {
    let Some(raw) = annotation else {
        return ANY_TYPE.to_owned();
    };

    match parse(raw) {
        Some(expr) => expr.render(),
        None => {
            tracing::debug!(annotation = raw, "unresolvable type annotation, using Any");
            ANY_TYPE.to_owned()
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
enum Token {
    Ident(String),
    Open,
    Close,
    Comma,
    Pipe,
}

#[derive(Debug, Clone, PartialEq, Eq)]
enum TypeExpr {
    Named { name: String, args: Vec<TypeExpr> },
    Union(Vec<TypeExpr>),
}

impl TypeExpr {
    fn render(&self) -> String {
        match self {
            Self::Named { name, args } if args.is_empty() => name.clone(),
            Self::Named { name, args } => {
                let rendered: Vec<String> = args.iter().map(Self::render).collect();
                format!("{name}[{}]", rendered.join(", "))
            }
            Self::Union(members) => {
                let rendered: Vec<String> = members.iter().map(Self::render).collect();
                rendered.join(" | ")
            }
        }
    }
}

fn parse(raw: &str) -> Option<TypeExpr> {
    let mut tokens = tokenize(raw)?.into_iter().peekable();
    let expr = parse_union(&mut tokens, 0)?;
    tokens.next().is_none().then_some(expr)
}

fn tokenize(raw: &str) -> Option<Vec<Token>> {
    let mut tokens = Vec::new();
    let mut chars = raw.chars().peekable();

    while let Some(&ch) = chars.peek() {
        match ch {
            '[' => push_symbol(&mut tokens, &mut chars, Token::Open),
            ']' => push_symbol(&mut tokens, &mut chars, Token::Close),
            ',' => push_symbol(&mut tokens, &mut chars, Token::Comma),
            '|' => push_symbol(&mut tokens, &mut chars, Token::Pipe),
            c if c.is_whitespace() => {
                chars.next();
            }
            c if c.is_alphabetic() || c == '_' => {
                let mut ident = String::new();
                while let Some(&next) = chars.peek() {
                    if next.is_alphanumeric() || next == '_' || next == '.' {
                        ident.push(next);
                        chars.next();
                    } else {
                        break;
                    }
                }
                if ident.split('.').any(str::is_empty) {
                    return None;
                }
                tokens.push(Token::Ident(ident));
            }
            _ => return None,
        }
    }

    Some(tokens)
}

fn push_symbol(
    tokens: &mut Vec<Token>,
    chars: &mut Peekable<std::str::Chars<'_>>,
    token: Token,
) {
    chars.next();
    tokens.push(token);
}

fn parse_union(tokens: &mut Peekable<IntoIter<Token>>, depth: usize) -> Option<TypeExpr> {
    if depth > MAX_NESTING_DEPTH {
        return None;
    }
    let mut members = vec![parse_term(tokens, depth)?];
    while tokens.next_if_eq(&Token::Pipe).is_some() {
        members.push(parse_term(tokens, depth)?);
    }

    if members.len() == 1 {
        members.pop()
    } else {
        Some(TypeExpr::Union(members))
    }
}

fn parse_term(tokens: &mut Peekable<IntoIter<Token>>, depth: usize) -> Option<TypeExpr> {
    let Some(Token::Ident(raw_name)) = tokens.next() else {
        return None;
    };
    let name = normalize_alias(&raw_name);

    let mut args = Vec::new();
    if tokens.next_if_eq(&Token::Open).is_some() {
        args.push(parse_union(tokens, depth + 1)?);
        while tokens.next_if_eq(&Token::Comma).is_some() {
            args.push(parse_union(tokens, depth + 1)?);
        }
        tokens.next_if_eq(&Token::Close)?;
    }

    Some(TypeExpr::Named { name, args })
}

fn normalize_alias(name: &str) -> String {
    let canonical = match name.to_ascii_lowercase().as_str() {
        "str" | "string" => "str",
        "int" | "integer" => "int",
        "float" | "number" => "float",
        "bool" | "boolean" => "bool",
        "list" | "array" => "list",
        "dict" | "object" => "dict",
        "any" => ANY_TYPE,
        "none" | "null" => "None",
        _ => return name.to_owned(),
    };
    canonical.to_owned()
}
