//! Order message formatting.
//!
//! Pure text construction over a snapshot and a customer record; no
//! network or UI concerns reach this module.

use crate::cart::Snapshot;
use crate::checkout::CustomerInfo;

/// Build the human-readable order summary handed to the order channel.
///
/// One line per cart line with name, quantity, unit price, and subtotal,
/// followed by the grand total and a customer block listing only the
/// fields actually supplied. `*` marks emphasis in the receiving chat
/// client.
pub fn format_order_message(
    snapshot: &Snapshot,
    customer: &CustomerInfo,
    store_name: &str,
) -> String {
    let mut message = format!("*Nuevo Pedido - {store_name}*");
    message.push_str("\n *Productos:*");

    for line in &snapshot.lines {
        message.push_str(&format!(
            "\n \u{27a1} {} *Cantidad:* {} *Precio:* {} *Subtotal:* {}",
            line.name, line.quantity, line.unit_price, line.line_total,
        ));
    }

    message.push_str(&format!("\n *Total del pedido:* {}", snapshot.total));
    message.push_str("\n *Datos del cliente:*");

    if let Some(name) = &customer.name {
        message.push_str(&format!("\n\u{1f464} *Nombre:* {name}"));
    }
    if let Some(phone) = &customer.phone {
        message.push_str(&format!("\n\u{1f4f1} *Tel\u{e9}fono:* {phone}"));
    }
    if let Some(address) = &customer.address {
        message.push_str(&format!("\n\u{1f3e0} *Direcci\u{f3}n:* {address}"));
    }

    message
}
