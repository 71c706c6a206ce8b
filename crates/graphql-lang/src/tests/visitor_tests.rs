use crate::ast::*;
use crate::parser::{parse_document, ParseOptions};
use crate::source::Source;
use crate::visitor::{walk_document, VisitAction, VisitContext, Visitor};

fn parse(body: &str) -> Document {
    let source = Source::new(body);
    parse_document(&source, ParseOptions::default()).expect("parse ok")
}

#[derive(Default)]
struct FieldNameCollector {
    names: Vec<String>,
}

impl Visitor for FieldNameCollector {
    fn enter_field(&mut self, _ctx: &VisitContext<'_>, field: &Field) -> VisitAction {
        self.names.push(field.name.as_str().to_string());
        VisitAction::Continue
    }
}

#[test]
fn collects_fields_in_document_order() {
    let doc = parse("{ hero { name friends { name } } }");
    let mut collector = FieldNameCollector::default();
    walk_document(&doc, &mut collector);
    assert_eq!(collector.names, vec!["hero", "name", "friends", "name"]);
}

struct SkipFriends {
    names: Vec<String>,
}

impl Visitor for SkipFriends {
    fn enter_field(&mut self, _ctx: &VisitContext<'_>, field: &Field) -> VisitAction {
        self.names.push(field.name.as_str().to_string());
        if field.name.as_str() == "friends" {
            VisitAction::SkipChildren
        } else {
            VisitAction::Continue
        }
    }
}

#[test]
fn skip_children_prunes_subtree_but_not_siblings() {
    let doc = parse("{ hero { name friends { name } appearsIn } }");
    let mut visitor = SkipFriends { names: Vec::new() };
    walk_document(&doc, &mut visitor);
    assert_eq!(visitor.names, vec!["hero", "name", "friends", "appearsIn"]);
}

struct BreakOnSecondField {
    seen: usize,
}

impl Visitor for BreakOnSecondField {
    fn enter_field(&mut self, _ctx: &VisitContext<'_>, _field: &Field) -> VisitAction {
        self.seen += 1;
        if self.seen == 2 {
            VisitAction::Break
        } else {
            VisitAction::Continue
        }
    }
}

#[test]
fn break_aborts_entire_walk() {
    let doc = parse("{ a b c }");
    let mut visitor = BreakOnSecondField { seen: 0 };
    walk_document(&doc, &mut visitor);
    assert_eq!(visitor.seen, 2);
}

#[derive(Default)]
struct DepthTracker {
    max_depth: usize,
}

impl Visitor for DepthTracker {
    fn enter_selection_set(&mut self, ctx: &VisitContext<'_>, _node: &SelectionSet) -> VisitAction {
        self.max_depth = self.max_depth.max(ctx.depth());
        VisitAction::Continue
    }
}

#[test]
fn ancestors_track_nesting_depth() {
    let doc = parse("{ a { b { c } } }");
    let mut tracker = DepthTracker::default();
    walk_document(&doc, &mut tracker);
    assert!(tracker.max_depth >= 3);
}
