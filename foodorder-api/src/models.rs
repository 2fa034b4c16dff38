use serde::{Deserialize, Serialize};

/// Menu prices the order service accepts.
pub const FOOD_PRICES: [f64; 5] = [100.0, 200.0, 300.0, 400.0, 500.0];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum FoodName {
    Pizza,
    Burger,
    Pasta,
    Salad,
    Sandwich,
}

impl FoodName {
    pub const ALL: [FoodName; 5] = [
        FoodName::Pizza,
        FoodName::Burger,
        FoodName::Pasta,
        FoodName::Salad,
        FoodName::Sandwich,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            FoodName::Pizza => "Pizza",
            FoodName::Burger => "Burger",
            FoodName::Pasta => "Pasta",
            FoodName::Salad => "Salad",
            FoodName::Sandwich => "Sandwich",
        }
    }
}

impl std::fmt::Display for FoodName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum FoodType {
    Veg,
    #[serde(rename = "Non-Veg")]
    NonVeg,
    Vegan,
    #[serde(rename = "Gluten-Free")]
    GlutenFree,
}

impl FoodType {
    pub const ALL: [FoodType; 4] = [
        FoodType::Veg,
        FoodType::NonVeg,
        FoodType::Vegan,
        FoodType::GlutenFree,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            FoodType::Veg => "Veg",
            FoodType::NonVeg => "Non-Veg",
            FoodType::Vegan => "Vegan",
            FoodType::GlutenFree => "Gluten-Free",
        }
    }
}

impl std::fmt::Display for FoodType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A food order as the collaborator stores and returns it.
///
/// IDs are entered manually and echoed back by the server; `total_cost` is
/// recomputed server-side on add/update as well.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Order {
    pub id: i32,
    pub food_name: FoodName,
    pub food_type: FoodType,
    pub price: f64,
    pub quantity: i32,
    pub total_cost: f64,
    pub customer_name: String,
    pub contact: String,
    pub address: String,
}

impl Order {
    /// Wire field names, in declaration order. The table header and the
    /// required-field check both follow this order.
    pub const FIELDS: [&'static str; 9] = [
        "id",
        "foodName",
        "foodType",
        "price",
        "quantity",
        "totalCost",
        "customerName",
        "contact",
        "address",
    ];
}

/// The order currently bound to the form, either empty (add mode) or
/// pre-populated from an existing row (edit mode).
///
/// `price`, `quantity` and `total_cost` are kept private so every mutation
/// goes through the setters and `total_cost == price * quantity` holds at
/// all times while editing.
#[derive(Debug, Clone, PartialEq)]
pub struct OrderDraft {
    pub id: Option<i32>,
    pub food_name: Option<FoodName>,
    pub food_type: Option<FoodType>,
    price: f64,
    quantity: i32,
    total_cost: f64,
    pub customer_name: String,
    pub contact: String,
    pub address: String,
}

impl Default for OrderDraft {
    fn default() -> Self {
        OrderDraft {
            id: None,
            food_name: None,
            food_type: None,
            price: 0.0,
            quantity: 1,
            total_cost: 0.0,
            customer_name: String::new(),
            contact: String::new(),
            address: String::new(),
        }
    }
}

impl OrderDraft {
    pub fn price(&self) -> f64 {
        self.price
    }

    pub fn quantity(&self) -> i32 {
        self.quantity
    }

    pub fn total_cost(&self) -> f64 {
        self.total_cost
    }

    pub fn set_price(&mut self, price: f64) {
        self.price = price;
        self.recompute_total();
    }

    pub fn set_quantity(&mut self, quantity: i32) {
        self.quantity = quantity;
        self.recompute_total();
    }

    fn recompute_total(&mut self) {
        self.total_cost = self.price * self.quantity as f64;
    }

    /// Checks every field for emptiness in wire declaration order and, if
    /// all are present, builds the submission payload. The error names the
    /// first empty field found. Numeric fields always carry a value once
    /// defaulted, so they never fail the check.
    pub fn assemble(&self) -> Result<Order, &'static str> {
        let id = self.id.ok_or("id")?;
        let food_name = self.food_name.ok_or("foodName")?;
        let food_type = self.food_type.ok_or("foodType")?;
        if self.customer_name.is_empty() {
            return Err("customerName");
        }
        if self.contact.is_empty() {
            return Err("contact");
        }
        if self.address.is_empty() {
            return Err("address");
        }
        Ok(Order {
            id,
            food_name,
            food_type,
            price: self.price,
            quantity: self.quantity,
            total_cost: self.total_cost,
            customer_name: self.customer_name.clone(),
            contact: self.contact.clone(),
            address: self.address.clone(),
        })
    }
}

impl From<&Order> for OrderDraft {
    /// Copies every field of an existing row into the draft. The derived
    /// total is recomputed from price and quantity, so the invariant holds
    /// even when the server row carries an inconsistent total.
    fn from(order: &Order) -> Self {
        let mut draft = OrderDraft {
            id: Some(order.id),
            food_name: Some(order.food_name),
            food_type: Some(order.food_type),
            price: order.price,
            quantity: order.quantity,
            total_cost: order.total_cost,
            customer_name: order.customer_name.clone(),
            contact: order.contact.clone(),
            address: order.address.clone(),
        };
        draft.recompute_total();
        draft
    }
}
