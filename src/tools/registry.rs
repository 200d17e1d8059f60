//! The closed set of counter operations and their endpoint declarations.
//!
//! Dispatch is data, not a method table: a [`ToolCall`] decodes into an
//! [`Operation`] variant, and applying a variant to a ledger is a pure
//! function returning the textual result fed back to the endpoint. Names
//! outside the set decode to a distinct error instead of a lookup failure.

use serde::de::DeserializeOwned;
use serde::Deserialize;

use crate::error::StockhandError;
use crate::ledger::{StockLedger, DEFAULT_THRESHOLD};
use crate::provider::ToolDefinition;
use crate::types::ToolCall;

use super::types::ToolParameters;

/// Operation names as the endpoint sees them.
pub const SET_STOCK: &str = "set_stock";
pub const PLACE_ORDER: &str = "place_order";
pub const GET_STOCK: &str = "get_stock";

/// A decoded counter operation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Operation {
    SetStock {
        item: String,
        qty: u32,
        threshold: u32,
    },
    PlaceOrder {
        item: String,
        qty: u32,
    },
    GetStock {
        item: String,
    },
}

#[derive(Deserialize)]
struct SetStockArgs {
    item: String,
    qty: u32,
    threshold: Option<u32>,
}

#[derive(Deserialize)]
struct PlaceOrderArgs {
    item: String,
    qty: u32,
}

#[derive(Deserialize)]
struct GetStockArgs {
    item: String,
}

impl Operation {
    /// Decode a tool call into an operation.
    ///
    /// Returns [`StockhandError::UnknownOperation`] for names outside the
    /// registered set and [`StockhandError::InvalidArgument`] when the
    /// argument mapping does not match the declared schema (missing fields,
    /// wrong types, negative quantities).
    pub fn from_call(call: &ToolCall) -> Result<Self, StockhandError> {
        match call.name.as_str() {
            SET_STOCK => {
                let args: SetStockArgs = decode(&call.arguments)?;
                Ok(Self::SetStock {
                    item: args.item,
                    qty: args.qty,
                    threshold: args.threshold.unwrap_or(DEFAULT_THRESHOLD),
                })
            }
            PLACE_ORDER => {
                let args: PlaceOrderArgs = decode(&call.arguments)?;
                Ok(Self::PlaceOrder {
                    item: args.item,
                    qty: args.qty,
                })
            }
            GET_STOCK => {
                let args: GetStockArgs = decode(&call.arguments)?;
                Ok(Self::GetStock { item: args.item })
            }
            other => Err(StockhandError::UnknownOperation(other.to_string())),
        }
    }

    /// Apply the operation to the ledger, returning the textual result.
    pub fn apply(self, ledger: &mut StockLedger) -> String {
        match self {
            Self::SetStock {
                item,
                qty,
                threshold,
            } => {
                ledger.set_stock(&item, qty, threshold);
                format!("Stock for {item} set to {qty} with threshold {threshold}.")
            }
            Self::PlaceOrder { item, qty } => {
                ledger.decrease_stock(&item, qty);
                format!("Ordered {qty} x {item}.")
            }
            Self::GetStock { item } => {
                let qty = ledger.get_stock(&item);
                format!("{item} stock level: {qty}.")
            }
        }
    }
}

fn decode<T: DeserializeOwned>(arguments: &serde_json::Value) -> Result<T, StockhandError> {
    serde_json::from_value(arguments.clone())
        .map_err(|e| StockhandError::InvalidArgument(e.to_string()))
}

/// The operation declarations handed to the endpoint on every request.
pub fn definitions() -> Vec<ToolDefinition> {
    vec![
        ToolDefinition {
            name: SET_STOCK.to_string(),
            description: "Set stock for an item".to_string(),
            parameters: ToolParameters::object()
                .string("item", "Item name", true)
                .integer("qty", "New quantity on hand", true)
                .integer("threshold", "Reorder threshold", false)
                .build()
                .schema,
        },
        ToolDefinition {
            name: PLACE_ORDER.to_string(),
            description: "Order an item by decreasing stock".to_string(),
            parameters: ToolParameters::object()
                .string("item", "Item name", true)
                .integer("qty", "Quantity ordered", true)
                .build()
                .schema,
        },
        ToolDefinition {
            name: GET_STOCK.to_string(),
            description: "Return current stock level".to_string(),
            parameters: ToolParameters::object()
                .string("item", "Item name", true)
                .build()
                .schema,
        },
    ]
}
