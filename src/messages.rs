use std::collections::HashMap;

use color_eyre::eyre::{Result, eyre};
use tracing::debug;

use crate::{
    csv::CsvPurchaseRecord,
    domain::{
        customer::CustomerResponse,
        message::Envelope,
        order::confirmation::OrderConfirmation,
        payment::request::PaymentRequest,
        payment_method::PaymentMethod,
        product::{PurchaseResponse, sum_line_totals},
        props::{Amount, CustomerId, OrderId, OrderReference, ProductId},
    },
};

struct PendingOrder {
    reference: OrderReference,
    order_id: Option<OrderId>,
    payment_method: PaymentMethod,
    customer: CustomerResponse,
    products: Vec<PurchaseResponse>,
}

// Groups purchase lines into orders and turns each order into its
// confirmation and payment request. Orders keep the order of first appearance.
pub struct OrderMessages {
    partitions: Option<u32>,
    orders: Vec<PendingOrder>,
    index: HashMap<String, usize>,
}

impl OrderMessages {
    pub fn new(partitions: Option<u32>) -> Self {
        OrderMessages {
            partitions,
            orders: vec![],
            index: HashMap::new(),
        }
    }

    pub fn handle(&mut self, r: CsvPurchaseRecord) -> Result<()> {
        let customer = CustomerResponse {
            id: CustomerId(r.customer_id),
            firstname: r.firstname,
            lastname: r.lastname,
            email: r.email,
        };
        let order_id = r.order_id.map(OrderId);
        let line = PurchaseResponse {
            product_id: ProductId(r.product_id),
            name: r.name,
            description: r.description,
            price: r.price,
            quantity: r.quantity,
        };

        if let Some(&idx) = self.index.get(&r.order_reference) {
            let order = &mut self.orders[idx];
            require_same_header(order, &customer, r.payment_method, order_id)?;

            debug!("Adding product {} to {}", line.product_id, order.reference);
            order.products.push(line);
            return Ok(());
        }

        debug!("Starting {} for customer {}", r.order_reference, customer.id);
        self.index.insert(r.order_reference.clone(), self.orders.len());
        self.orders.push(PendingOrder {
            reference: OrderReference(r.order_reference),
            order_id,
            payment_method: r.payment_method,
            customer,
            products: vec![line],
        });

        Ok(())
    }

    pub fn finish(self) -> Vec<Result<Vec<Envelope>>> {
        let partitions = self.partitions;
        self.orders
            .into_iter()
            .map(|order| envelopes(order, partitions))
            .collect()
    }
}

fn envelopes(order: PendingOrder, partitions: Option<u32>) -> Result<Vec<Envelope>> {
    let reference = order.reference.to_string();
    let total = sum_line_totals(&order.products)
        .map_err(|e| eyre!("Order {} rejected: {}", reference, e))?;

    let confirmation = OrderConfirmation::new(
        order.reference,
        Amount(total),
        order.payment_method,
        order.customer,
        order.products,
    )
    .map_err(|e| eyre!("Order {} rejected: {}", reference, e))?;
    let payment = PaymentRequest::for_order(&confirmation, order.order_id)
        .map_err(|e| eyre!("Payment for {} rejected: {}", reference, e))?;

    debug!("Encoding {} with total {}", reference, total);

    Ok(vec![
        Envelope::new(confirmation.into(), partitions)?,
        Envelope::new(payment.into(), partitions)?,
    ])
}

fn require_same_header(
    order: &PendingOrder,
    customer: &CustomerResponse,
    payment_method: PaymentMethod,
    order_id: Option<OrderId>,
) -> Result<()> {
    if order.customer != *customer {
        return Err(eyre!("Customer mismatch within order {}", order.reference));
    }
    if order.payment_method != payment_method {
        return Err(eyre!(
            "Payment method {} does not match {} of order {}",
            payment_method,
            order.payment_method,
            order.reference
        ));
    }
    if order.order_id != order_id {
        return Err(eyre!("Order id mismatch within order {}", order.reference));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use rust_decimal::{Decimal, dec};

    use crate::{
        csv::CsvPurchaseRecord,
        domain::{
            message::{Envelope, OrderMessage},
            payment_method::PaymentMethod,
            props::{Amount, OrderId},
        },
        messages::OrderMessages,
    };

    fn row(order: &str, product_id: i32, price: Decimal, quantity: Decimal) -> CsvPurchaseRecord {
        CsvPurchaseRecord {
            order_reference: order.to_owned(),
            order_id: Some(1),
            customer_id: "7".to_owned(),
            firstname: "Jane".to_owned(),
            lastname: "Doe".to_owned(),
            email: "jane@example.com".to_owned(),
            payment_method: PaymentMethod::Paypal,
            product_id,
            name: format!("Product {}", product_id),
            description: String::new(),
            price,
            quantity,
        }
    }

    fn finish(messages: OrderMessages) -> Vec<Envelope> {
        messages
            .finish()
            .into_iter()
            .flat_map(|r| r.unwrap())
            .collect()
    }

    #[test]
    fn test_groups_lines_into_orders() {
        let mut messages = OrderMessages::new(None);
        messages.handle(row("ORD-1", 3, dec!(24.99), dec!(2))).unwrap();
        messages.handle(row("ORD-2", 4, dec!(1), dec!(1))).unwrap();
        messages.handle(row("ORD-1", 5, dec!(5.00), dec!(1))).unwrap();

        let envelopes = finish(messages);

        assert_eq!(envelopes.len(), 4);
        let keys: Vec<&str> = envelopes.iter().map(|e| e.key.as_str()).collect();
        assert_eq!(keys, vec!["ORD-1", "ORD-1", "ORD-2", "ORD-2"]);

        match &envelopes[0].message {
            OrderMessage::OrderConfirmation(c) => {
                assert_eq!(c.products().len(), 2);
                assert_eq!(*c.total_amount(), Amount(dec!(54.98)));
                assert!(c.is_total_consistent());
            }
            other => panic!("unexpected {:?}", other),
        }
        match &envelopes[1].message {
            OrderMessage::PaymentRequest(r) => {
                assert_eq!(*r.amount(), Amount(dec!(54.98)));
                assert_eq!(r.order_id(), Some(OrderId(1)));
                assert_eq!(r.payment_method(), PaymentMethod::Paypal);
            }
            other => panic!("unexpected {:?}", other),
        }
    }

    #[test]
    fn test_rejects_conflicting_payment_method() {
        let mut messages = OrderMessages::new(None);
        messages.handle(row("ORD-1", 3, dec!(1), dec!(1))).unwrap();

        let mut conflicting = row("ORD-1", 4, dec!(2), dec!(1));
        conflicting.payment_method = PaymentMethod::Visa;
        let err = messages.handle(conflicting).unwrap_err();
        assert!(err.to_string().contains("does not match"));

        let envelopes = finish(messages);
        match &envelopes[0].message {
            OrderMessage::OrderConfirmation(c) => assert_eq!(c.products().len(), 1),
            other => panic!("unexpected {:?}", other),
        }
    }

    #[test]
    fn test_rejects_conflicting_customer() {
        let mut messages = OrderMessages::new(None);
        messages.handle(row("ORD-1", 3, dec!(1), dec!(1))).unwrap();

        let mut conflicting = row("ORD-1", 4, dec!(2), dec!(1));
        conflicting.email = "other@example.com".to_owned();

        messages.handle(conflicting).unwrap_err();
    }

    #[test]
    fn test_negative_price_rejects_order() {
        let mut messages = OrderMessages::new(None);
        messages.handle(row("ORD-1", 3, dec!(-1), dec!(1))).unwrap();
        messages.handle(row("ORD-2", 3, dec!(1), dec!(1))).unwrap();

        let results = messages.finish();

        assert!(results[0].is_err());
        assert_eq!(results[1].as_ref().unwrap().len(), 2);
    }

    #[test]
    fn test_overflowing_order_rejected() {
        let mut messages = OrderMessages::new(None);
        messages.handle(row("ORD-1", 3, Decimal::MAX, dec!(2))).unwrap();
        messages.handle(row("ORD-2", 3, dec!(1), dec!(1))).unwrap();

        let results = messages.finish();

        let err = results[0].as_ref().unwrap_err();
        assert!(err.to_string().contains("AmountOverflow"));
        assert_eq!(results[1].as_ref().unwrap().len(), 2);
    }

    #[test]
    fn test_partitions_assigned() {
        let mut messages = OrderMessages::new(Some(6));
        messages.handle(row("ORD-1001", 3, dec!(1), dec!(1))).unwrap();

        let envelopes = finish(messages);

        assert!(envelopes.iter().all(|e| e.partition == Some(1)));
    }
}
