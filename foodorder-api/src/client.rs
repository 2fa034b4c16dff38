use async_trait::async_trait;

use crate::error::ApiError;
use crate::models::Order;

/// The remote collaborator that owns persistent order storage.
#[async_trait]
pub trait OrderApi {
    async fn list_orders(&self) -> Result<Vec<Order>, ApiError>;
    async fn get_order(&self, id: i32) -> Result<Order, ApiError>;
    async fn add_order(&self, order: &Order) -> Result<Order, ApiError>;
    async fn update_order(&self, order: &Order) -> Result<Order, ApiError>;
    async fn delete_order(&self, id: i32) -> Result<String, ApiError>;
}

/// REST binding for the collaborator, rooted at `{endpoint}/foodapi`.
pub struct HttpOrderApi {
    client: reqwest::Client,
    base_url: String,
}

impl HttpOrderApi {
    pub fn new(endpoint: impl Into<String>) -> Self {
        let endpoint = endpoint.into();
        HttpOrderApi {
            client: reqwest::Client::new(),
            base_url: format!("{}/foodapi", endpoint.trim_end_matches('/')),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Non-2xx responses become `ApiError::Server` carrying the body text,
    /// which the collaborator uses for its plain-text error messages.
    async fn ensure_ok(response: reqwest::Response) -> Result<reqwest::Response, ApiError> {
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }
        let message = response.text().await.unwrap_or_default();
        Err(ApiError::Server {
            status: status.as_u16(),
            message,
        })
    }
}

#[async_trait]
impl OrderApi for HttpOrderApi {
    async fn list_orders(&self) -> Result<Vec<Order>, ApiError> {
        let response = self
            .client
            .get(format!("{}/all", self.base_url))
            .send()
            .await?;
        Ok(Self::ensure_ok(response).await?.json().await?)
    }

    async fn get_order(&self, id: i32) -> Result<Order, ApiError> {
        let response = self
            .client
            .get(format!("{}/get/{id}", self.base_url))
            .send()
            .await?;
        Ok(Self::ensure_ok(response).await?.json().await?)
    }

    async fn add_order(&self, order: &Order) -> Result<Order, ApiError> {
        let response = self
            .client
            .post(format!("{}/add", self.base_url))
            .json(order)
            .send()
            .await?;
        Ok(Self::ensure_ok(response).await?.json().await?)
    }

    async fn update_order(&self, order: &Order) -> Result<Order, ApiError> {
        let response = self
            .client
            .put(format!("{}/update", self.base_url))
            .json(order)
            .send()
            .await?;
        Ok(Self::ensure_ok(response).await?.json().await?)
    }

    async fn delete_order(&self, id: i32) -> Result<String, ApiError> {
        let response = self
            .client
            .delete(format!("{}/delete/{id}", self.base_url))
            .send()
            .await?;
        Ok(Self::ensure_ok(response).await?.text().await?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{FoodName, FoodType};
    use tokio::io::{AsyncReadExt, AsyncWriteExt};
    use tokio::net::TcpListener;

    struct Received {
        method: String,
        path: String,
        body: String,
    }

    /// One-shot collaborator stub: accepts a single connection, records the
    /// request line and body, and replies with the canned status and
    /// payload.
    async fn stub_collaborator(
        status_line: &'static str,
        content_type: &'static str,
        payload: String,
    ) -> (String, tokio::task::JoinHandle<Received>) {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let endpoint = format!("http://{}", listener.local_addr().unwrap());
        let handle = tokio::spawn(async move {
            let (mut stream, _) = listener.accept().await.unwrap();
            let mut raw = Vec::new();
            let mut chunk = [0u8; 1024];
            let header_end = loop {
                let n = stream.read(&mut chunk).await.unwrap();
                assert!(n > 0, "connection closed before headers ended");
                raw.extend_from_slice(&chunk[..n]);
                if let Some(pos) = raw.windows(4).position(|w| w == b"\r\n\r\n") {
                    break pos + 4;
                }
            };
            let head = String::from_utf8_lossy(&raw[..header_end]).to_string();
            let content_length = head
                .lines()
                .find_map(|line| {
                    let (name, value) = line.split_once(':')?;
                    name.eq_ignore_ascii_case("content-length")
                        .then(|| value.trim().parse::<usize>().unwrap())
                })
                .unwrap_or(0);
            while raw.len() < header_end + content_length {
                let n = stream.read(&mut chunk).await.unwrap();
                assert!(n > 0, "connection closed before body ended");
                raw.extend_from_slice(&chunk[..n]);
            }

            let request_line = head.lines().next().unwrap();
            let mut parts = request_line.split(' ');
            let method = parts.next().unwrap().to_string();
            let path = parts.next().unwrap().to_string();
            let body = String::from_utf8_lossy(&raw[header_end..]).to_string();

            let response = format!(
                "HTTP/1.1 {status_line}\r\nContent-Type: {content_type}\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{payload}",
                payload.len(),
            );
            stream.write_all(response.as_bytes()).await.unwrap();
            stream.shutdown().await.unwrap();

            Received { method, path, body }
        });
        (endpoint, handle)
    }

    fn sample_order() -> Order {
        Order {
            id: 3,
            food_name: FoodName::Pizza,
            food_type: FoodType::Veg,
            price: 200.0,
            quantity: 2,
            total_cost: 400.0,
            customer_name: "A".to_string(),
            contact: "B".to_string(),
            address: "C".to_string(),
        }
    }

    #[test]
    fn base_url_appends_api_path() {
        let api = HttpOrderApi::new("http://localhost:8080");
        assert_eq!(api.base_url(), "http://localhost:8080/foodapi");
    }

    #[test]
    fn base_url_tolerates_trailing_slash() {
        let api = HttpOrderApi::new("http://localhost:8080/");
        assert_eq!(api.base_url(), "http://localhost:8080/foodapi");
    }

    #[tokio::test]
    async fn list_issues_get_all() {
        let (endpoint, server) =
            stub_collaborator("200 OK", "application/json", "[]".to_string()).await;
        let api = HttpOrderApi::new(endpoint);

        let orders = api.list_orders().await.unwrap();

        assert!(orders.is_empty());
        let received = server.await.unwrap();
        assert_eq!(received.method, "GET");
        assert_eq!(received.path, "/foodapi/all");
    }

    #[tokio::test]
    async fn get_issues_get_with_the_id_in_the_path() {
        let order = sample_order();
        let (endpoint, server) = stub_collaborator(
            "200 OK",
            "application/json",
            serde_json::to_string(&order).unwrap(),
        )
        .await;
        let api = HttpOrderApi::new(endpoint);

        let fetched = api.get_order(3).await.unwrap();

        assert_eq!(fetched, order);
        let received = server.await.unwrap();
        assert_eq!(received.method, "GET");
        assert_eq!(received.path, "/foodapi/get/3");
    }

    #[tokio::test]
    async fn add_posts_the_order_as_json() {
        let order = sample_order();
        let (endpoint, server) = stub_collaborator(
            "200 OK",
            "application/json",
            serde_json::to_string(&order).unwrap(),
        )
        .await;
        let api = HttpOrderApi::new(endpoint);

        api.add_order(&order).await.unwrap();

        let received = server.await.unwrap();
        assert_eq!(received.method, "POST");
        assert_eq!(received.path, "/foodapi/add");
        let sent: Order = serde_json::from_str(&received.body).unwrap();
        assert_eq!(sent, order);
    }

    #[tokio::test]
    async fn update_puts_the_order_as_json() {
        let order = sample_order();
        let (endpoint, server) = stub_collaborator(
            "200 OK",
            "application/json",
            serde_json::to_string(&order).unwrap(),
        )
        .await;
        let api = HttpOrderApi::new(endpoint);

        api.update_order(&order).await.unwrap();

        let received = server.await.unwrap();
        assert_eq!(received.method, "PUT");
        assert_eq!(received.path, "/foodapi/update");
        let sent: Order = serde_json::from_str(&received.body).unwrap();
        assert_eq!(sent, order);
    }

    #[tokio::test]
    async fn delete_issues_delete_and_returns_the_body_text() {
        let (endpoint, server) = stub_collaborator(
            "200 OK",
            "text/plain",
            "Order deleted successfully".to_string(),
        )
        .await;
        let api = HttpOrderApi::new(endpoint);

        let message = api.delete_order(5).await.unwrap();

        assert_eq!(message, "Order deleted successfully");
        let received = server.await.unwrap();
        assert_eq!(received.method, "DELETE");
        assert_eq!(received.path, "/foodapi/delete/5");
    }

    #[tokio::test]
    async fn non_2xx_body_surfaces_as_the_server_message() {
        let (endpoint, server) = stub_collaborator(
            "500 Internal Server Error",
            "text/plain",
            "Order with ID 3 already exists!".to_string(),
        )
        .await;
        let api = HttpOrderApi::new(endpoint);

        let err = api.add_order(&sample_order()).await.unwrap_err();

        assert_eq!(err.server_message(), Some("Order with ID 3 already exists!"));
        server.await.unwrap();
    }
}
