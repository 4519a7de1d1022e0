use shop_sketch::domain::model::{
    Account, Address, CreditCard, Customer, Item, OrderStatus, Payment, PaymentMethod,
    PaymentStatus, Product, ProductCategory, ProductReview, ShipmentStatus,
};
use shop_sketch::{Catalog, Search, ShopError};

fn seller_with_products() -> Account {
    let mut seller = Account::new("bob", "Bob's Lamps", "bob@example.com");
    for (id, name, price) in [("p-1", "Desk Lamp", 2_500), ("p-2", "Floor Lamp", 7_000)] {
        seller
            .add_product(Product {
                product_id: id.to_string(),
                name: name.to_string(),
                description: String::new(),
                price,
                category: ProductCategory::new("Lighting", "Lamps and bulbs"),
                available_item_count: 10,
                seller: String::new(),
            })
            .unwrap();
    }
    seller
}

#[test]
fn test_guest_browses_registers_and_orders() {
    let seller = seller_with_products();
    let catalog = Catalog::from_products(seller.products.clone());

    let desk_lamp = &catalog.search_products_by_name("Desk Lamp")[0];
    assert_eq!(desk_lamp.seller, "bob");

    let mut customer = Customer::guest();
    customer
        .add_item_to_cart(Item::new(&desk_lamp.product_id, 2, desk_lamp.price).unwrap())
        .unwrap();
    assert!(matches!(
        customer.place_order("ORD-1"),
        Err(ShopError::GuestCannotOrder)
    ));

    let mut buyer = Account::new("erin", "Erin", "erin@example.com");
    buyer.add_payment_method(PaymentMethod::CreditCard(CreditCard {
        name_on_card: "Erin".to_string(),
        last_four: "4242".to_string(),
        billing_address: Address::default(),
    }));
    let mut customer = customer.register_account(buyer);

    assert_eq!(customer.place_order("ORD-1").unwrap(), OrderStatus::Pending);
    assert!(customer.shopping_cart().is_empty());

    let mut order = customer.orders()[0].clone();
    assert_eq!(order.total(), 5_000);

    let method = customer.account().unwrap().payment_methods.first().cloned();
    order.make_payment(Payment::new(order.total(), PaymentStatus::Completed, method));
    assert_eq!(order.amount_paid(), order.total());

    let mut shipment = order.send_for_shipment("SHP-1", "ground");
    shipment.set_status(ShipmentStatus::Shipped);
    shipment.set_status(ShipmentStatus::Delivered);
    order.set_status(OrderStatus::Completed);

    let order_statuses: Vec<OrderStatus> = order.order_log().iter().map(|l| l.status).collect();
    assert_eq!(
        order_statuses,
        vec![
            OrderStatus::Unshipped,
            OrderStatus::Pending,
            OrderStatus::Shipped,
            OrderStatus::Completed
        ]
    );
    assert_eq!(shipment.shipment_log().len(), 3);
    assert!(order.order_log().iter().all(|l| l.order_number == "ORD-1"));
}

#[test]
fn test_stock_reservation_and_reviews() {
    let mut seller = seller_with_products();
    let product = &mut seller.products[0];

    product.reserve(10).unwrap();
    assert_eq!(product.available_count(), 0);
    assert!(matches!(
        product.reserve(1),
        Err(ShopError::InsufficientStock { .. })
    ));

    let mut reviewer = Account::new("erin", "Erin", "erin@example.com");
    reviewer
        .add_product_review(ProductReview::new(5, "Bright", "erin").unwrap())
        .unwrap();
    assert_eq!(reviewer.reviews.len(), 1);
}
