use likeness_core::{inspect_eq, inspect_record, inspect_value};
use std::rc::Rc;

/// Item with a scalar id and a free-text description
#[derive(Debug, Clone)]
pub struct Item {
    pub id: u32,
    pub desc: String,
}

inspect_record!(Item { id, desc });

#[allow(dead_code)]
pub fn item(id: u32, desc: &str) -> Item {
    Item {
        id,
        desc: desc.to_string(),
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Status {
    Open,
    Shipped,
}

inspect_value!(Status);

/// Value type with its own equality
#[derive(Debug, Clone, PartialEq)]
pub struct Money {
    pub cents: i64,
    pub currency: &'static str,
}

inspect_eq!(Money);

#[derive(Debug, Clone)]
pub struct Line {
    pub sku: String,
    pub qty: u32,
    pub price: Money,
}

inspect_record!(Line { sku, qty, price });

#[derive(Debug, Clone)]
pub struct Audit {
    pub created_by: String,
    pub revision: u64,
}

inspect_record!(Audit { created_by, revision });

/// Nested record without an equality of its own
#[derive(Debug, Clone)]
pub struct Order {
    pub id: u64,
    pub status: Status,
    pub description: String,
    pub customer: Option<String>,
    pub lines: Vec<Line>,
    pub audit: Audit,
}

inspect_record!(Order {
    id,
    status,
    description,
    customer,
    lines,
    audit,
});

#[allow(dead_code)]
pub fn line(sku: &str, qty: u32) -> Line {
    Line {
        sku: sku.to_string(),
        qty,
        price: Money {
            cents: 250 * i64::from(qty),
            currency: "EUR",
        },
    }
}

#[allow(dead_code)]
pub fn order(id: u64) -> Order {
    Order {
        id,
        status: Status::Open,
        description: "first order".to_string(),
        customer: Some("ada".to_string()),
        lines: vec![line("A-1", 1), line("B-2", 2)],
        audit: Audit {
            created_by: "system".to_string(),
            revision: 1,
        },
    }
}

/// Holder of shared state, used for identity comparisons
#[derive(Debug, Clone)]
pub struct Inner {
    pub value: u32,
}

inspect_record!(Inner { value });

#[derive(Debug, Clone)]
pub struct Holder {
    pub name: String,
    pub inner: Rc<Inner>,
}

inspect_record!(Holder { name, inner });

#[allow(dead_code)]
pub fn holder(inner: &Rc<Inner>) -> Holder {
    Holder {
        name: "holder".to_string(),
        inner: Rc::clone(inner),
    }
}

/// Linked chain used to exceed the recursion ceiling
#[derive(Debug)]
pub struct Chain {
    pub label: u32,
    pub next: Option<Box<Chain>>,
}

inspect_record!(Chain { label, next });

/// Chain of `len` links whose innermost link carries `tail_label`.
#[allow(dead_code)]
pub fn chain(len: usize, tail_label: u32) -> Chain {
    let mut head = Chain {
        label: tail_label,
        next: None,
    };
    for _ in 1..len {
        head = Chain {
            label: 0,
            next: Some(Box::new(head)),
        };
    }
    head
}
