use foodorder_api::{Order, OrderApi, OrderDraft};
use tracing::{error, info};

/// Owns the whole UI state: the order snapshot, the form draft, the lookup
/// panel and the transient message. Every user action mutates this state and
/// issues at most one request against the collaborator, awaited to
/// settlement. No retry, no debounce, no cancellation.
pub struct OrderManager<C> {
    client: C,
    orders: Vec<Order>,
    draft: OrderDraft,
    id_to_fetch: String,
    fetched_order: Option<Order>,
    message: String,
    edit_mode: bool,
}

impl<C: OrderApi> OrderManager<C> {
    pub fn new(client: C) -> Self {
        OrderManager {
            client,
            orders: Vec::new(),
            draft: OrderDraft::default(),
            id_to_fetch: String::new(),
            fetched_order: None,
            message: String::new(),
            edit_mode: false,
        }
    }

    pub fn orders(&self) -> &[Order] {
        &self.orders
    }

    pub fn draft(&self) -> &OrderDraft {
        &self.draft
    }

    pub fn draft_mut(&mut self) -> &mut OrderDraft {
        &mut self.draft
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn edit_mode(&self) -> bool {
        self.edit_mode
    }

    pub fn fetched_order(&self) -> Option<&Order> {
        self.fetched_order.as_ref()
    }

    pub fn id_to_fetch(&self) -> &str {
        &self.id_to_fetch
    }

    pub fn set_id_to_fetch(&mut self, id: impl Into<String>) {
        self.id_to_fetch = id.into();
    }

    /// Replaces the snapshot wholesale. On failure the stale list stays
    /// displayed and only the message changes.
    pub async fn fetch_all_orders(&mut self) {
        match self.client.list_orders().await {
            Ok(orders) => self.orders = orders,
            Err(err) => {
                error!(%err, "failed to fetch orders");
                self.message = "Failed to fetch orders.".to_string();
            }
        }
    }

    /// Submits the draft as a create. An empty required field aborts before
    /// any request is made.
    pub async fn add_order(&mut self) {
        let order = match self.draft.assemble() {
            Ok(order) => order,
            Err(field) => {
                self.message = format!("Please fill out {field}");
                return;
            }
        };
        match self.client.add_order(&order).await {
            Ok(created) => {
                info!(id = created.id, "order added");
                self.message = "Order added successfully.".to_string();
                self.fetch_all_orders().await;
                self.reset_form();
            }
            Err(err) => {
                error!(%err, "failed to add order");
                self.message = err
                    .server_message()
                    .unwrap_or("Error adding order.")
                    .to_string();
            }
        }
    }

    /// Submits the draft as an update against its existing id. Shares the
    /// create contract, including the reset that exits edit mode.
    pub async fn update_order(&mut self) {
        let order = match self.draft.assemble() {
            Ok(order) => order,
            Err(field) => {
                self.message = format!("Please fill out {field}");
                return;
            }
        };
        match self.client.update_order(&order).await {
            Ok(updated) => {
                info!(id = updated.id, "order updated");
                self.message = "Order updated successfully.".to_string();
                self.fetch_all_orders().await;
                self.reset_form();
            }
            Err(err) => {
                error!(%err, "failed to update order");
                self.message = err
                    .server_message()
                    .unwrap_or("Error updating order.")
                    .to_string();
            }
        }
    }

    /// Deletes without confirmation; on success the server's plain-text
    /// response is shown verbatim.
    pub async fn delete_order(&mut self, id: i32) {
        match self.client.delete_order(id).await {
            Ok(response) => {
                self.message = response;
                self.fetch_all_orders().await;
            }
            Err(err) => {
                error!(%err, "failed to delete order");
                self.message = "Error deleting order.".to_string();
            }
        }
    }

    /// Looks up the separately tracked id. Any failure, including a lookup
    /// id that is not an integer, clears the panel and reads as not-found.
    pub async fn fetch_order_by_id(&mut self) {
        let id = match self.id_to_fetch.trim().parse::<i32>() {
            Ok(id) => id,
            Err(_) => {
                self.fetched_order = None;
                self.message = "Order not found.".to_string();
                return;
            }
        };
        match self.client.get_order(id).await {
            Ok(order) => {
                self.fetched_order = Some(order);
                self.message.clear();
            }
            Err(err) => {
                error!(%err, "failed to fetch order");
                self.fetched_order = None;
                self.message = "Order not found.".to_string();
            }
        }
    }

    /// Copies the selected row verbatim into the draft and enters edit mode.
    /// The server record is untouched until submit.
    pub fn start_edit(&mut self, order: Order) {
        self.message = format!("Editing order with ID {}", order.id);
        self.draft = OrderDraft::from(&order);
        self.edit_mode = true;
    }

    /// Returns the draft to its defaults and exits edit mode. Also serves as
    /// the cancel action; the message is left as-is.
    pub fn reset_form(&mut self) {
        self.draft = OrderDraft::default();
        self.edit_mode = false;
    }
}
