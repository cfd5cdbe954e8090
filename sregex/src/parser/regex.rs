use crate::ast::{Ast, ClassBracketed, ClassItem, ClassKind, RepetitionKind};
use crate::chars;
use nom::branch::alt;
use nom::bytes::complete::take;
use nom::character::complete;
use nom::character::complete::one_of;
use nom::combinator::{map, map_opt, opt, value};
use nom::multi::{many0, many1, separated_list1};
use nom::sequence::{delimited, pair, preceded, separated_pair};
use nom::IResult;

pub(crate) fn full_regex(input: &str) -> IResult<&str, Ast> {
    expression(input)
}

pub(crate) fn expression(input: &str) -> IResult<&str, Ast> {
    alternation(input)
}

fn alternation(input: &str) -> IResult<&str, Ast> {
    map(
        separated_list1(complete::char('|'), sequence),
        fold_left(Ast::Alternation),
    )(input)
}

fn sequence(input: &str) -> IResult<&str, Ast> {
    map(many1(quantified), fold_left(Ast::Concat))(input)
}

/// Folds a non-empty list of sub-trees into a left-associative binary tree
fn fold_left(f: fn(Box<Ast>, Box<Ast>) -> Ast) -> impl Fn(Vec<Ast>) -> Ast {
    move |items| {
        let mut iter = items.into_iter();
        let first = iter.next().expect("many1 yields at least one sub-tree");
        iter.fold(first, |lhs, rhs| f(Box::new(lhs), Box::new(rhs)))
    }
}

fn quantified(input: &str) -> IResult<&str, Ast> {
    map(pair(factor, opt(one_of("*+?"))), apply_quantifier)(input)
}

fn apply_quantifier((tree, quantifier): (Ast, Option<char>)) -> Ast {
    let kind = match quantifier {
        Some('?') => RepetitionKind::ZeroOrOne,
        Some('*') => RepetitionKind::ZeroOrMore,
        Some('+') => RepetitionKind::OneOrMore,
        None => return tree,
        _ => unreachable!("one_of only yields *, + or ?"),
    };
    Ast::Repetition(kind, Box::new(tree))
}

fn factor(input: &str) -> IResult<&str, Ast> {
    alt((group, escape, dot, bracketed, literal))(input)
}

fn group(input: &str) -> IResult<&str, Ast> {
    delimited(complete::char('('), expression, complete::char(')'))(input)
}

fn dot(input: &str) -> IResult<&str, Ast> {
    value(Ast::Dot, complete::char('.'))(input)
}

fn literal(input: &str) -> IResult<&str, Ast> {
    map_opt(take(1usize), |s: &str| {
        let c = one_char(s);
        (c.is_ascii() && chars::is_literal(c as u8)).then(|| Ast::Literal(c as u8))
    })(input)
}

fn escape(input: &str) -> IResult<&str, Ast> {
    map_opt(preceded(complete::char('\\'), take(1usize)), |s: &str| {
        match one_char(s) {
            'd' => Some(Ast::Class(ClassKind::Digit)),
            'D' => Some(Ast::Class(ClassKind::NonDigit)),
            'w' => Some(Ast::Class(ClassKind::Word)),
            'W' => Some(Ast::Class(ClassKind::NonWord)),
            's' => Some(Ast::Class(ClassKind::Whitespace)),
            'S' => Some(Ast::Class(ClassKind::NonWhitespace)),
            c => escaped_byte(c).map(Ast::Literal),
        }
    })(input)
}

fn bracketed(input: &str) -> IResult<&str, Ast> {
    map(
        delimited(
            complete::char('['),
            pair(opt(complete::char('^')), many0(class_item)),
            complete::char(']'),
        ),
        |(negated, items)| {
            // Ranges with a start above their end are dropped, not reported
            let items = items
                .into_iter()
                .filter(|item| match item {
                    ClassItem::Range(start, end) => start <= end,
                    _ => true,
                })
                .collect();
            Ast::Bracketed(ClassBracketed {
                negated: negated.is_some(),
                items,
            })
        },
    )(input)
}

fn class_item(input: &str) -> IResult<&str, ClassItem> {
    alt((class_escape, class_range, class_literal, class_dash))(input)
}

fn class_escape(input: &str) -> IResult<&str, ClassItem> {
    map_opt(preceded(complete::char('\\'), take(1usize)), |s: &str| {
        match one_char(s) {
            'd' => Some(ClassItem::Class(ClassKind::Digit)),
            'D' => Some(ClassItem::Class(ClassKind::NonDigit)),
            'w' => Some(ClassItem::Class(ClassKind::Word)),
            'W' => Some(ClassItem::Class(ClassKind::NonWord)),
            's' => Some(ClassItem::Class(ClassKind::Whitespace)),
            'S' => Some(ClassItem::Class(ClassKind::NonWhitespace)),
            c => escaped_byte(c).map(ClassItem::Literal),
        }
    })(input)
}

fn class_range(input: &str) -> IResult<&str, ClassItem> {
    map(
        separated_pair(class_char, complete::char('-'), class_char),
        |(start, end)| ClassItem::Range(start, end),
    )(input)
}

fn class_literal(input: &str) -> IResult<&str, ClassItem> {
    map(class_char, ClassItem::Literal)(input)
}

// A dash is a plain class member when it doesn't sit between two range endpoints
fn class_dash(input: &str) -> IResult<&str, ClassItem> {
    value(ClassItem::Literal(b'-'), complete::char('-'))(input)
}

fn class_char(input: &str) -> IResult<&str, u8> {
    map_opt(take(1usize), |s: &str| {
        let c = one_char(s);
        (c.is_ascii() && chars::is_valid(c as u8) && !matches!(c, ']' | '\\' | '-'))
            .then_some(c as u8)
    })(input)
}

/// The byte denoted by the character following a backslash: the usual control character
/// mnemonics, or the character itself for any other valid byte. This gives a predictable way
/// to escape any special without a whitelist
fn escaped_byte(c: char) -> Option<u8> {
    match c {
        't' => Some(b'\t'),
        'n' => Some(b'\n'),
        'v' => Some(0x0b),
        'f' => Some(0x0c),
        'r' => Some(b'\r'),
        c if c.is_ascii() && chars::is_valid(c as u8) => Some(c as u8),
        _ => None,
    }
}

// Helper function to take a &str of one char and return that char, panicking in debug
// mode upon multiple chars
fn one_char(s: &str) -> char {
    let mut cs = s.chars();
    let c = cs.next().expect("take should take 1 char");
    #[cfg(debug_assertions)]
    assert_eq!(cs.next(), None, "take(1) should take only 1 character");
    c
}
