use super::*;

const CONFIG_VARS: &[&str] = &[
    "SERVICE",
    "PORT",
    "ORDERS_FILE",
    "EMAIL_ENDPOINT",
    "CART_ENDPOINT",
    "ADMIN_EMAIL",
    "FROM_NAME",
    "FROM_EMAIL",
    "RESEND_API_KEY",
    "DOWNSTREAM_TIMEOUT_SECS",
];

/// # Safety
/// Only called from `from_env_scenarios`, the single test that touches these vars.
unsafe fn clear_config_env() {
    for key in CONFIG_VARS {
        unsafe { std::env::remove_var(key) };
    }
}

// All `from_env` cases share process-wide variables, so they run in one test.
#[test]
fn from_env_scenarios() {
    unsafe { clear_config_env() };
    let cfg = ServerConfig::from_env().unwrap();
    assert_eq!(cfg.service, ServiceKind::All);
    assert_eq!(cfg.port, 8000);
    assert_eq!(cfg.orders_file, PathBuf::from(DEFAULT_ORDERS_FILE));
    assert_eq!(cfg.email_endpoint, DEFAULT_EMAIL_ENDPOINT);
    assert_eq!(cfg.cart_endpoint, DEFAULT_CART_ENDPOINT);
    assert_eq!(cfg.downstream_timeout_secs, DEFAULT_DOWNSTREAM_TIMEOUT_SECS);
    assert_eq!(cfg.mail.from_name, DEFAULT_FROM_NAME);
    assert_eq!(cfg.mail.from_email, DEFAULT_FROM_EMAIL);
    assert!(cfg.mail.resend_api_key.is_none());
    assert!(cfg.mail.admin_email.is_none());

    unsafe {
        clear_config_env();
        std::env::set_var("SERVICE", "Checkout");
        std::env::set_var("ORDERS_FILE", "/tmp/cardshop/orders.json");
        std::env::set_var("CART_ENDPOINT", "http://cart.internal:8002/api/cart/");
        std::env::set_var("ADMIN_EMAIL", "admin@example.edu");
        std::env::set_var("RESEND_API_KEY", "  ");
        std::env::set_var("DOWNSTREAM_TIMEOUT_SECS", "3");
    }
    let cfg = ServerConfig::from_env().unwrap();
    assert_eq!(cfg.service, ServiceKind::Checkout);
    assert_eq!(cfg.port, 8003);
    assert_eq!(cfg.orders_file, PathBuf::from("/tmp/cardshop/orders.json"));
    assert_eq!(cfg.cart_endpoint, "http://cart.internal:8002/api/cart");
    assert_eq!(cfg.mail.admin_email.as_deref(), Some("admin@example.edu"));
    assert!(cfg.mail.resend_api_key.is_none(), "blank key means simulated delivery");
    assert_eq!(cfg.downstream_timeout_secs, 3);

    unsafe {
        clear_config_env();
        std::env::set_var("SERVICE", "inventory");
    }
    let err = ServerConfig::from_env().unwrap_err().to_string();
    assert!(err.contains("unknown SERVICE"));

    unsafe {
        clear_config_env();
        std::env::set_var("PORT", "eighty");
    }
    let err = ServerConfig::from_env().unwrap_err().to_string();
    assert!(err.contains("invalid PORT"));

    unsafe {
        clear_config_env();
        std::env::set_var("PORT", "9100");
    }
    assert_eq!(ServerConfig::from_env().unwrap().port, 9100);

    unsafe { clear_config_env() };
}

#[test]
fn service_kind_parses_known_names() {
    for kind in [
        ServiceKind::All,
        ServiceKind::Catalog,
        ServiceKind::Cart,
        ServiceKind::Checkout,
        ServiceKind::Email,
        ServiceKind::Orders,
    ] {
        assert_eq!(ServiceKind::from_str(kind.as_str()), Some(kind));
    }
    assert_eq!(ServiceKind::from_str(" CART "), Some(ServiceKind::Cart));
    assert_eq!(ServiceKind::from_str("frontend"), None);
}

#[test]
fn service_kind_default_ports_are_distinct() {
    let ports = [
        ServiceKind::All.default_port(),
        ServiceKind::Catalog.default_port(),
        ServiceKind::Cart.default_port(),
        ServiceKind::Checkout.default_port(),
        ServiceKind::Email.default_port(),
        ServiceKind::Orders.default_port(),
    ];
    let mut sorted = ports.to_vec();
    sorted.sort_unstable();
    sorted.dedup();
    assert_eq!(sorted.len(), ports.len());
}

#[test]
fn only_all_and_cart_host_the_cart() {
    assert!(ServiceKind::All.hosts_cart());
    assert!(ServiceKind::Cart.hosts_cart());
    assert!(!ServiceKind::Checkout.hosts_cart());
    assert!(ServiceKind::Email.hosts_email());
    assert!(!ServiceKind::Checkout.hosts_email());
}

#[test]
fn env_parse_falls_back_on_garbage() {
    let key = "__TEST_CARDSHOP_ENV_PARSE_771__";
    unsafe { std::env::set_var(key, "not-a-number") };
    assert_eq!(env_parse(key, 5_u64), 5);
    unsafe { std::env::set_var(key, " 12 ") };
    assert_eq!(env_parse(key, 5_u64), 12);
    unsafe { std::env::remove_var(key) };
    assert_eq!(env_parse(key, 5_u64), 5);
}
