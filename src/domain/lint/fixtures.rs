//! Shared landscapes for lint tests.

use crate::domain::foundation::{DomainModelId, SnapshotId};
use crate::domain::landscape::{
    Aggregate, BoundedContext, Capability, DomainEvent, GlossaryTerm, Persona, TaxonomyNode,
    UserStory, Workflow,
};
use crate::domain::lint::LintContext;

pub fn empty_context() -> LintContext {
    LintContext::empty(DomainModelId::new("dm-test").unwrap())
}

/// Billing and shipping contexts, every reference resolving and every
/// relationship backed by events in both directions. Lints clean.
pub fn wired_context() -> LintContext {
    let mut ctx = empty_context();
    ctx.governance_snapshot_id = Some(SnapshotId::new("gov-1").unwrap());
    ctx.taxonomy_snapshot_id = Some(SnapshotId::new("tax-1").unwrap());

    ctx.taxonomy_nodes = vec![
        TaxonomyNode::new("billing", "platform.billing", "subsystem"),
        TaxonomyNode::new("shipping", "platform.shipping", "subsystem"),
    ];
    ctx.capabilities = vec![
        Capability::new("CAP-001", "Invoicing")
            .with_taxonomy_node("billing")
            .with_counts(2, 1),
        Capability::new("CAP-002", "Dispatch")
            .with_taxonomy_node("shipping")
            .with_counts(1, 1),
    ];
    ctx.personas = vec![
        Persona::new("PER-001", "Accountant").with_typical_capabilities(["CAP-001"]),
        Persona::new("PER-002", "Warehouse Clerk").with_typical_capabilities(["CAP-002"]),
    ];
    ctx.user_stories = vec![
        UserStory::new("US-001", "Send invoice", "PER-001").with_capabilities(["CAP-001"]),
        UserStory::new("US-002", "Dispatch parcel", "PER-002").with_capabilities(["CAP-002"]),
    ];
    ctx.bounded_contexts = vec![
        BoundedContext::new("BC-001", "billing", "Billing")
            .with_context_type("internal")
            .with_taxonomy_node("billing")
            .with_relationship("BC-002"),
        BoundedContext::new("BC-002", "shipping", "Shipping")
            .with_taxonomy_node("shipping")
            .with_relationship("BC-001"),
    ];
    ctx.aggregates = vec![
        Aggregate::new("AGG-001", "BC-001", "invoice"),
        Aggregate::new("AGG-002", "BC-002", "shipment"),
    ];
    ctx.domain_events = vec![
        DomainEvent::new("EV-001", "BC-001", "invoice-paid")
            .with_aggregate("AGG-001")
            .consumed_by(["shipping"])
            .with_source_capability("CAP-001")
            .with_target_capabilities(["CAP-002"]),
        DomainEvent::new("EV-002", "BC-002", "shipment-dispatched")
            .with_aggregate("AGG-002")
            .consumed_by(["billing"])
            .with_source_capability("CAP-002")
            .with_target_capabilities(["CAP-001"]),
    ];
    ctx.glossary_terms = vec![GlossaryTerm::new("GT-001", "Invoice").scoped_to("BC-001")];
    ctx.workflows = vec![Workflow::new("WF-001", "order-fulfilment", "Order Fulfilment")
        .spanning(["BC-001", "BC-002"])
        .with_transition("invoiced", "paid", Some("invoice-paid"))
        .with_transition("paid", "shipped", Some("shipment-dispatched"))];
    ctx
}

/// A landscape that trips at least one rule in every set.
pub fn broken_context() -> LintContext {
    let mut ctx = wired_context();
    ctx.personas.push(Persona::new("PER-003", "Auditor").with_typical_capabilities(["CAP-404"]));
    ctx.user_stories
        .push(UserStory::new("US-003", "Ghost story", "PER-GHOST").with_capabilities(["CAP-GHOST"]));
    ctx.capabilities
        .push(Capability::new("CAP-003", "Reporting").with_taxonomy_node("reporting"));
    ctx.bounded_contexts.push(
        BoundedContext::new("BC-003", "ledger", "Ledger").with_relationship("BC-MISSING"),
    );
    ctx.bounded_contexts
        .push(BoundedContext::new("BC-004", "crm", "CRM").with_context_type("external"));
    ctx.aggregates.push(Aggregate::new("AGG-003", "BC-NOPE", "orphan"));
    ctx.domain_events.push(
        DomainEvent::new("EV-003", "BC-VOID", "ledger-closed")
            .with_aggregate("AGG-MISSING")
            .consumed_by(["nowhere"])
            .with_source_capability("CAP-MISSING"),
    );
    ctx.glossary_terms
        .push(GlossaryTerm::new("GT-002", "Ledger").scoped_to("BC-ABSENT"));
    ctx.workflows.push(
        Workflow::new("WF-002", "close-books", "Close Books")
            .spanning(["BC-001", "BC-ZZZ"])
            .with_transition("open", "closing", Some("shipment-dispatched"))
            .with_transition("audited", "closed", Some("books-closed")),
    );
    ctx
}
