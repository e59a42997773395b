//! Integration tests for the public API.
//!
//! These tests exercise the operations the way a calling crate would, with
//! realistic record types rather than bare integers.

use pretty_assertions::assert_eq;
use seqkit_core::{
    EmptyInputError, HashMap, SeqExt, all_match, any_match, distinct, filter, for_each, group_by,
    map, max, min, none_match, not_all_match, partition_by, reduce, reduce_with_seed, to_map,
    try_map, try_max, try_reduce,
};

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
struct Order {
    id: u32,
    customer: &'static str,
    amount_cents: u64,
    shipped: bool,
}

fn orders() -> Vec<Order> {
    vec![
        Order { id: 1, customer: "ada", amount_cents: 1_250, shipped: true },
        Order { id: 2, customer: "bob", amount_cents: 400, shipped: false },
        Order { id: 3, customer: "ada", amount_cents: 9_900, shipped: false },
        Order { id: 4, customer: "cyd", amount_cents: 9_900, shipped: true },
        Order { id: 5, customer: "bob", amount_cents: 75, shipped: true },
    ]
}

#[test]
fn test_filter_and_quantifiers() {
    let orders = orders();

    let pending = filter(&orders, |o| !o.shipped);
    assert_eq!(map(&pending, |o| o.id), vec![2, 3]);

    assert!(any_match(&orders, |o| o.amount_cents > 5_000));
    assert!(!all_match(&orders, |o| o.shipped));
    assert!(none_match(&orders, |o| o.customer == "dee"));
    assert!(not_all_match(&orders, |o| o.shipped));
}

#[test]
fn test_largest_order_prefers_first_on_tie() {
    let orders = orders();
    let largest = max(&orders, |a, b| a.amount_cents.cmp(&b.amount_cents))
        .expect("orders are not empty");
    assert_eq!(largest.id, 3);

    let smallest = min(&orders, |a, b| a.amount_cents.cmp(&b.amount_cents))
        .expect("orders are not empty");
    assert_eq!(smallest.id, 5);
}

#[test]
fn test_revenue_per_customer() {
    let orders = orders();
    let revenue: HashMap<&str, u64> =
        to_map(&orders, |o| o.customer, |o| o.amount_cents, |a, b| a + b);

    assert_eq!(revenue.len(), 3);
    assert_eq!(revenue["ada"], 11_150);
    assert_eq!(revenue["bob"], 475);
    assert_eq!(revenue["cyd"], 9_900);
}

#[test]
fn test_group_and_partition() {
    let orders = orders();

    let by_customer = group_by(&orders, |o| o.customer);
    assert_eq!(map(&by_customer["bob"], |o| o.id), vec![2, 5]);

    let shipped = partition_by(&orders, |o| o.shipped);
    assert_eq!(map(&shipped[true], |o| o.id), vec![1, 4, 5]);
    assert_eq!(map(&shipped[false], |o| o.id), vec![2, 3]);
}

#[test]
fn test_distinct_customers() {
    let customers = map(&orders(), |o| o.customer);
    assert_eq!(distinct(&customers), vec!["ada", "bob", "cyd"]);
}

#[test]
fn test_totals() {
    let amounts = map(&orders(), |o| o.amount_cents);
    assert_eq!(reduce(&amounts, |a, b| a + b), Ok(21_525));
    assert_eq!(reduce_with_seed(1_000, &amounts, |a, b| a + b), 22_525);
}

#[test]
fn test_empty_inputs() {
    let none: Vec<Order> = Vec::new();
    let by_amount = |a: &Order, b: &Order| a.amount_cents.cmp(&b.amount_cents);

    assert_eq!(max(&none, by_amount), Err(EmptyInputError));
    assert_eq!(min(&none, by_amount), Err(EmptyInputError));
    assert_eq!(
        reduce(&none, |a, _| a).map(|o| o.id),
        Err(EmptyInputError)
    );
    assert!(filter(&none, |o| o.shipped).is_empty());
    assert!(group_by(&none, |o| o.customer).is_empty());
    assert!(to_map(&none, |o| o.id, |o| o.amount_cents, |a, _| a).is_empty());

    let split = partition_by(&none, |o| o.shipped).into_map();
    assert_eq!(split.len(), 2);

    let mut visits = 0;
    for_each(&none, |_| visits += 1);
    assert_eq!(visits, 0);
}

#[test]
fn test_input_is_never_modified() {
    let original = orders();
    let input = original.clone();

    let _ = filter(&input, |o| o.shipped);
    let _ = distinct(&input);
    let _ = group_by(&input, |o| o.customer);
    let _ = input.partition_by(|o| o.amount_cents > 1_000);

    assert_eq!(input, original);
}

#[derive(Debug, PartialEq)]
enum ReportError {
    NoData,
    BadAmount(String),
}

impl From<EmptyInputError> for ReportError {
    fn from(_: EmptyInputError) -> Self {
        ReportError::NoData
    }
}

fn parse_amount(raw: &&str) -> Result<u64, ReportError> {
    raw.parse()
        .map_err(|_| ReportError::BadAmount(raw.to_string()))
}

#[test]
fn test_callback_errors_pass_through() {
    assert_eq!(
        try_map(&["10", "x1", "20"], parse_amount),
        Err(ReportError::BadAmount("x1".to_string()))
    );

    let amounts = try_map(&["10", "32"], parse_amount).expect("all amounts parse");
    assert_eq!(
        try_reduce(&amounts, |a, b| a.checked_add(*b).ok_or(ReportError::NoData)),
        Ok(42)
    );

    let empty: [u64; 0] = [];
    assert_eq!(
        try_max(&empty, |a, b| Ok::<_, ReportError>(a.cmp(b))),
        Err(ReportError::NoData)
    );
}

#[test]
fn test_error_is_std_error() {
    fn assert_error<E: std::error::Error + Send + Sync + 'static>(_: &E) {}
    assert_error(&EmptyInputError);
    let boxed: Box<dyn std::error::Error> = Box::new(EmptyInputError);
    assert_eq!(
        boxed.to_string(),
        "operation requires a non-empty input sequence"
    );
}
