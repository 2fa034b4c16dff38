use foodorder_api::{Order, OrderDraft};

const WIDTHS: [usize; 9] = [6, 10, 12, 8, 8, 10, 16, 12, 16];

/// Plain-text orders table over every wire field, with the edit/delete
/// action hint below the rows.
pub fn render_table(orders: &[Order]) -> String {
    if orders.is_empty() {
        return "No orders found.\n".to_string();
    }

    let mut out = String::new();
    for (field, width) in Order::FIELDS.iter().zip(WIDTHS) {
        out.push_str(&format!("{field:<width$}"));
    }
    out.push('\n');
    for order in orders {
        let cells = [
            order.id.to_string(),
            order.food_name.to_string(),
            order.food_type.to_string(),
            order.price.to_string(),
            order.quantity.to_string(),
            order.total_cost.to_string(),
            order.customer_name.clone(),
            order.contact.clone(),
            order.address.clone(),
        ];
        for (cell, width) in cells.iter().zip(WIDTHS) {
            out.push_str(&format!("{cell:<width$}"));
        }
        out.push('\n');
    }
    out.push_str("Actions: edit <id> | delete <id>\n");
    out
}

/// The lookup panel body: the fetched order as pretty-printed JSON.
pub fn render_fetched(order: &Order) -> String {
    serde_json::to_string_pretty(order).unwrap_or_default()
}

/// One-line summary of the draft as currently bound to the form.
pub fn render_draft(draft: &OrderDraft) -> String {
    let id = draft
        .id
        .map(|id| id.to_string())
        .unwrap_or_else(|| "-".to_string());
    let food_name = draft
        .food_name
        .map(|n| n.to_string())
        .unwrap_or_else(|| "-".to_string());
    let food_type = draft
        .food_type
        .map(|t| t.to_string())
        .unwrap_or_else(|| "-".to_string());
    format!(
        "id={id} food={food_name} type={food_type} price={} quantity={} totalCost={} customer={:?} contact={:?} address={:?}",
        draft.price(),
        draft.quantity(),
        draft.total_cost(),
        draft.customer_name,
        draft.contact,
        draft.address,
    )
}
