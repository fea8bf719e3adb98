use rust_decimal::Decimal;

use crate::domain::plan::{BillingPeriod, Plan, PlanId};
use crate::domain::product::{Product, ProductId};
use crate::text::normalize;

/// Immutable product/plan reference data. Built once at startup from the
/// seed literals; no mutation API exists.
#[derive(Clone, Debug, Default)]
pub struct Catalog {
    products: Vec<Product>,
    plans: Vec<Plan>,
}

impl Catalog {
    pub fn new(products: Vec<Product>, plans: Vec<Plan>) -> Self {
        Self { products, plans }
    }

    pub fn product(&self, product_id: &ProductId) -> Option<&Product> {
        self.products.iter().find(|product| &product.id == product_id)
    }

    pub fn plan(&self, plan_id: &PlanId) -> Option<&Plan> {
        self.plans.iter().find(|plan| &plan.id == plan_id)
    }

    pub fn products(&self) -> &[Product] {
        &self.products
    }

    pub fn plans(&self) -> &[Plan] {
        &self.plans
    }

    /// Case- and diacritic-insensitive substring match on the category name.
    pub fn products_in_category(&self, term: &str) -> Vec<&Product> {
        let needle = normalize(term);
        self.products
            .iter()
            .filter(|product| normalize(&product.category).contains(&needle))
            .collect()
    }

    /// Case- and diacritic-insensitive substring match on name or category.
    pub fn search(&self, term: &str) -> Vec<&Product> {
        let needle = normalize(term);
        self.products
            .iter()
            .filter(|product| {
                normalize(&product.name).contains(&needle)
                    || normalize(&product.category).contains(&needle)
            })
            .collect()
    }
}

/// Fixed store catalog: eight products and six subscription plans.
pub fn seed() -> Catalog {
    Catalog::new(seed_products(), seed_plans())
}

fn seed_products() -> Vec<Product> {
    [
        ("1", "iPhone 15 Pro", 1299_99, "eletrônicos", 12, "Smartphone premium com chip A17 Pro"),
        ("2", "MacBook Air M2", 2899_99, "eletrônicos", 6, "Notebook ultrafino com chip M2"),
        ("3", "Nike Air Max", 299_99, "calçados", 18, "Tênis esportivo confortável"),
        ("4", "Camiseta Premium", 79_99, "roupas", 35, "100% algodão orgânico"),
        ("5", "Fone Bluetooth", 199_99, "eletrônicos", 22, "Cancelamento de ruído ativo"),
        ("6", "Smartwatch", 399_99, "eletrônicos", 14, "Monitor de saúde e fitness"),
        ("7", "Jaqueta Jeans", 149_99, "roupas", 28, "Estilo casual moderno"),
        ("8", "Mochila Executiva", 129_99, "acessórios", 16, "Compartimento para laptop"),
    ]
    .into_iter()
    .map(|(id, name, price_cents, category, stock, description)| Product {
        id: ProductId(id.to_owned()),
        name: name.to_owned(),
        unit_price: Decimal::new(price_cents, 2),
        category: category.to_owned(),
        stock,
        description: description.to_owned(),
    })
    .collect()
}

fn seed_plans() -> Vec<Plan> {
    use BillingPeriod::{Annual, Monthly};

    let plan = |id: &str, name: &str, price_cents: i64, period, features: &[&str]| Plan {
        id: PlanId(id.to_owned()),
        name: name.to_owned(),
        price: Decimal::new(price_cents, 2),
        billing_period: period,
        features: features.iter().map(|feature| (*feature).to_owned()).collect(),
    };

    vec![
        plan(
            "1",
            "WhatsApp Básico",
            39_90,
            Monthly,
            &["Bot WhatsApp", "50 planilhas/mês", "Modelos básicos", "Suporte email"],
        ),
        plan(
            "2",
            "WhatsApp Pro",
            89_90,
            Monthly,
            &[
                "Bot avançado",
                "500 planilhas/mês",
                "Todos os modelos",
                "Relatórios automáticos",
                "Suporte prioritário",
            ],
        ),
        plan(
            "3",
            "WhatsApp Enterprise",
            199_90,
            Monthly,
            &[
                "Bot personalizado",
                "Planilhas ilimitadas",
                "Integração API",
                "Dashboard completo",
                "Suporte 24/7",
            ],
        ),
        plan(
            "4",
            "WhatsApp Básico Anual",
            399_90,
            Annual,
            &["Bot WhatsApp", "50 planilhas/mês", "Modelos básicos", "2 meses grátis"],
        ),
        plan(
            "5",
            "WhatsApp Pro Anual",
            899_90,
            Annual,
            &["Bot avançado", "500 planilhas/mês", "Todos os modelos", "Relatórios", "2 meses grátis"],
        ),
        plan(
            "6",
            "WhatsApp Enterprise Anual",
            1999_90,
            Annual,
            &["Bot personalizado", "Planilhas ilimitadas", "Integração completa", "2 meses grátis"],
        ),
    ]
}
