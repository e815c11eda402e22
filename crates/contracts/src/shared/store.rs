//! Состояние приложения: четыре списка сущностей.
//!
//! Все изменения являются чистыми функциями, возвращающие новое `AppState` с целиком
//! заменённым списком. Ссылочная целостность не проверяется: удалённый
//! поставщик/товар/пользователь остаётся в заказах и отображается заглушкой.

use serde::{Deserialize, Serialize};

use crate::domain::a001_supplier::fields::SUPPLIER_FIELDS;
use crate::domain::a001_supplier::{Supplier, SupplierDto};
use crate::domain::a002_product::fields::PRODUCT_FIELDS;
use crate::domain::a002_product::{Product, ProductDto, SupplierPrice};
use crate::domain::a003_user::fields::USER_FIELDS;
use crate::domain::a003_user::{User, UserDto};
use crate::domain::a004_order::fields::ORDER_FIELDS;
use crate::domain::a004_order::{Order, OrderDto, OrderStatus};
use crate::domain::common::{resolve_name, AggregateRoot, EntityId, IdGenerator};
use crate::shared::errors::FormError;
use crate::shared::filter::{filter_and_sort, FieldSpec, FilterValues, SortConfig};
use crate::shared::pricing;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AppState {
    pub suppliers: Vec<Supplier>,
    pub products: Vec<Product>,
    pub users: Vec<User>,
    pub orders: Vec<Order>,
    #[serde(skip)]
    ids: IdGenerator,
}

impl AppState {
    pub fn new() -> Self {
        Self::default()
    }

    // ------------------------------------------------------------------
    // Замена списков целиком
    // ------------------------------------------------------------------

    pub fn with_suppliers(&self, suppliers: Vec<Supplier>) -> Self {
        Self {
            suppliers,
            ..self.clone()
        }
    }

    pub fn with_products(&self, products: Vec<Product>) -> Self {
        Self {
            products,
            ..self.clone()
        }
    }

    pub fn with_users(&self, users: Vec<User>) -> Self {
        Self {
            users,
            ..self.clone()
        }
    }

    pub fn with_orders(&self, orders: Vec<Order>) -> Self {
        Self {
            orders,
            ..self.clone()
        }
    }

    // ------------------------------------------------------------------
    // Разрешение ссылок
    // ------------------------------------------------------------------

    pub fn supplier_name(&self, id: EntityId) -> String {
        resolve_name(&self.suppliers, id)
    }

    pub fn product_name(&self, id: EntityId) -> String {
        resolve_name(&self.products, id)
    }

    pub fn user_name(&self, id: EntityId) -> String {
        resolve_name(&self.users, id)
    }

    // ------------------------------------------------------------------
    // Создание / изменение / удаление
    // ------------------------------------------------------------------

    /// Новый ID и генератор, продвинутый за него. ID никогда не совпадает с
    /// уже существующими в любом из списков.
    fn allocate_id(&self) -> Result<(EntityId, IdGenerator), FormError> {
        let mut ids = IdGenerator::starting_after(self.ids.last().max(self.max_id()));
        let id = ids.next().ok_or(FormError::IdsExhausted)?;
        Ok((id, ids))
    }

    fn max_id(&self) -> EntityId {
        let suppliers = self.suppliers.iter().map(|s| s.id);
        let products = self.products.iter().map(|p| p.id);
        let users = self.users.iter().map(|u| u.id);
        let orders = self.orders.iter().map(|o| o.id);
        suppliers
            .chain(products)
            .chain(users)
            .chain(orders)
            .max()
            .unwrap_or(0)
    }

    /// Создать (dto.id = None) или заменить поставщика
    pub fn save_supplier(&self, dto: &SupplierDto) -> Result<Self, FormError> {
        dto.validate()?;
        Ok(match dto.id {
            Some(id) => self.with_suppliers(replace_by_id(&self.suppliers, Supplier::from_dto(id, dto))),
            None => {
                let (id, ids) = self.allocate_id()?;
                let mut next = self.with_suppliers(append(&self.suppliers, Supplier::from_dto(id, dto)));
                next.ids = ids;
                next
            }
        })
    }

    pub fn delete_supplier(&self, id: EntityId) -> Self {
        self.with_suppliers(remove_by_id(&self.suppliers, id))
    }

    pub fn save_product(&self, dto: &ProductDto) -> Result<Self, FormError> {
        dto.validate()?;
        Ok(match dto.id {
            Some(id) => self.with_products(replace_by_id(&self.products, Product::from_dto(id, dto))),
            None => {
                let (id, ids) = self.allocate_id()?;
                let mut next = self.with_products(append(&self.products, Product::from_dto(id, dto)));
                next.ids = ids;
                next
            }
        })
    }

    pub fn delete_product(&self, id: EntityId) -> Self {
        self.with_products(remove_by_id(&self.products, id))
    }

    pub fn save_user(&self, dto: &UserDto) -> Result<Self, FormError> {
        dto.validate()?;
        Ok(match dto.id {
            Some(id) => self.with_users(replace_by_id(&self.users, User::from_dto(id, dto))),
            None => {
                let (id, ids) = self.allocate_id()?;
                let mut next = self.with_users(append(&self.users, User::from_dto(id, dto)));
                next.ids = ids;
                next
            }
        })
    }

    pub fn delete_user(&self, id: EntityId) -> Self {
        self.with_users(remove_by_id(&self.users, id))
    }

    /// Стоимость заказа фиксируется здесь, при сохранении формы
    pub fn save_order(&self, dto: &OrderDto) -> Result<Self, FormError> {
        Ok(match dto.id {
            Some(id) => {
                let order = dto.to_order(id)?;
                self.with_orders(replace_by_id(&self.orders, order))
            }
            None => {
                let (id, ids) = self.allocate_id()?;
                let order = dto.to_order(id)?;
                let mut next = self.with_orders(append(&self.orders, order));
                next.ids = ids;
                next
            }
        })
    }

    pub fn delete_order(&self, id: EntityId) -> Self {
        self.with_orders(remove_by_id(&self.orders, id))
    }

    // ------------------------------------------------------------------
    // Представления для таблиц (пересчитываются на каждом рендере)
    // ------------------------------------------------------------------

    pub fn supplier_view(&self, fields: &[FieldSpec], filters: &FilterValues, sort: Option<&SortConfig>) -> Vec<Supplier> {
        filter_and_sort(&self.suppliers, fields, SUPPLIER_FIELDS, self, filters, sort)
    }

    pub fn product_view(&self, fields: &[FieldSpec], filters: &FilterValues, sort: Option<&SortConfig>) -> Vec<Product> {
        filter_and_sort(&self.products, fields, PRODUCT_FIELDS, self, filters, sort)
    }

    pub fn user_view(&self, fields: &[FieldSpec], filters: &FilterValues, sort: Option<&SortConfig>) -> Vec<User> {
        filter_and_sort(&self.users, fields, USER_FIELDS, self, filters, sort)
    }

    pub fn order_view(&self, fields: &[FieldSpec], filters: &FilterValues, sort: Option<&SortConfig>) -> Vec<Order> {
        filter_and_sort(&self.orders, fields, ORDER_FIELDS, self, filters, sort)
    }

    // ------------------------------------------------------------------
    // Демо-данные (те же, что засевает демо-схема)
    // ------------------------------------------------------------------

    pub fn demo() -> Self {
        let suppliers = vec![
            Supplier { id: 1, name: "Supplier A".into() },
            Supplier { id: 2, name: "Supplier B".into() },
            Supplier { id: 3, name: "Supplier C".into() },
        ];

        let products = vec![
            Product {
                id: 1,
                name: "Composite Resin".into(),
                category: "Restorative".into(),
                manufacturer: "3M".into(),
                reference_number: "CR-001".into(),
                unit: "syringe".into(),
                suppliers: vec![
                    SupplierPrice { supplier_id: 1, price: 1149.75 },
                    SupplierPrice { supplier_id: 2, price: 1062.50 },
                ],
            },
            Product {
                id: 2,
                name: "Dental Cement".into(),
                category: "Adhesives".into(),
                manufacturer: "GC".into(),
                reference_number: "DC-002".into(),
                unit: "kit".into(),
                suppliers: vec![
                    SupplierPrice { supplier_id: 1, price: 2249.75 },
                    SupplierPrice { supplier_id: 3, price: 2125.00 },
                ],
            },
        ];

        let users = vec![
            User {
                id: 1,
                name: "Dr. John Smith".into(),
                email: "john.smith@dental.com".into(),
                department: "General Dentistry".into(),
            },
            User {
                id: 2,
                name: "Dr. Sarah Johnson".into(),
                email: "sarah.j@dental.com".into(),
                department: "Orthodontics".into(),
            },
        ];

        let orders = vec![
            Order {
                id: 1,
                user_id: 1,
                product_id: 1,
                supplier_id: 2,
                quantity: 2,
                order_date: "2024-03-01".into(),
                delivery_date: Some("2024-03-05".into()),
                status: OrderStatus::Pending,
                supplier_price: 1062.50,
                total_cost: pricing::total_cost(2, 1062.50),
            },
            Order {
                id: 2,
                user_id: 2,
                product_id: 2,
                supplier_id: 3,
                quantity: 1,
                order_date: "2024-03-02".into(),
                delivery_date: Some("2024-03-07".into()),
                status: OrderStatus::Pending,
                supplier_price: 2125.00,
                total_cost: pricing::total_cost(1, 2125.00),
            },
        ];

        Self {
            suppliers,
            products,
            users,
            orders,
            ids: IdGenerator::starting_after(3),
        }
    }
}

// ----------------------------------------------------------------------
// Операции над списком: всегда новый Vec
// ----------------------------------------------------------------------

/// Добавить запись в конец
pub fn append<A: Clone>(items: &[A], item: A) -> Vec<A> {
    let mut next = items.to_vec();
    next.push(item);
    next
}

/// Заменить запись с тем же ID; если такой нет, список не меняется
pub fn replace_by_id<A: AggregateRoot + Clone>(items: &[A], item: A) -> Vec<A> {
    items
        .iter()
        .map(|existing| {
            if existing.id() == item.id() {
                item.clone()
            } else {
                existing.clone()
            }
        })
        .collect()
}

/// Удалить запись по ID
pub fn remove_by_id<A: AggregateRoot + Clone>(items: &[A], id: EntityId) -> Vec<A> {
    items.iter().filter(|item| item.id() != id).cloned().collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::a004_order::fields as order_fields;

    fn supplier_dto(name: &str) -> SupplierDto {
        SupplierDto {
            id: None,
            name: name.into(),
        }
    }

    #[test]
    fn test_create_appends_with_fresh_ids() {
        let state = AppState::new();
        let state = state.save_supplier(&supplier_dto("Supplier A")).unwrap();
        let state = state.save_supplier(&supplier_dto("Supplier B")).unwrap();
        assert_eq!(state.suppliers.len(), 2);
        assert_eq!(state.suppliers[0].name, "Supplier A");
        assert!(state.suppliers[1].id > state.suppliers[0].id);
    }

    #[test]
    fn test_create_rejects_empty_required_field() {
        let state = AppState::new();
        assert_eq!(
            state.save_supplier(&supplier_dto("")),
            Err(FormError::Required("Supplier name"))
        );
    }

    #[test]
    fn test_original_state_is_untouched() {
        let before = AppState::demo();
        let after = before.delete_supplier(1);
        assert_eq!(before.suppliers.len(), 3);
        assert_eq!(after.suppliers.len(), 2);
    }

    #[test]
    fn test_update_replaces_by_id() {
        let state = AppState::demo();
        let mut dto = state.users[1].to_dto();
        dto.department = "Surgery".into();
        let state = state.save_user(&dto).unwrap();
        assert_eq!(state.users.len(), 2);
        assert_eq!(state.users[1].department, "Surgery");
        assert_eq!(state.users[1].id, 2);
    }

    #[test]
    fn test_update_of_missing_id_changes_nothing() {
        let state = AppState::demo();
        let dto = SupplierDto {
            id: Some(999),
            name: "Ghost".into(),
        };
        assert_eq!(state.save_supplier(&dto).unwrap().suppliers, state.suppliers);
    }

    #[test]
    fn test_new_ids_never_collide_with_existing() {
        let state = AppState::demo()
            .with_users(vec![User {
                id: i64::MAX - 1,
                name: "Far future".into(),
                email: "f@f".into(),
                department: String::new(),
            }]);
        let state = state.save_supplier(&supplier_dto("New")).unwrap();
        assert_eq!(state.suppliers.last().map(|s| s.id), Some(i64::MAX));

        assert_eq!(
            state.save_supplier(&supplier_dto("One more")),
            Err(FormError::IdsExhausted)
        );
    }

    #[test]
    fn test_create_fails_when_max_id_is_taken() {
        let state = AppState::demo().with_users(vec![User {
            id: i64::MAX,
            name: "Far future".into(),
            email: String::new(),
            department: String::new(),
        }]);
        assert_eq!(state.save_supplier(&supplier_dto("New")), Err(FormError::IdsExhausted));
        assert_eq!(state.save_user(&UserDto::default()), Err(FormError::Required("Name")));

        let mut order = OrderDto::new_for_today();
        order.user_id = "1".into();
        order.select_product("2", &state.products);
        assert_eq!(state.save_order(&order), Err(FormError::IdsExhausted));
    }

    #[test]
    fn test_user_without_email_is_saved() {
        let dto = UserDto {
            name: "Dr. New".into(),
            ..UserDto::default()
        };
        let state = AppState::demo().save_user(&dto).unwrap();
        let user = state.users.last().unwrap();
        assert_eq!(user.name, "Dr. New");
        assert_eq!(user.email, "");
    }

    #[test]
    fn test_save_order_computes_total() {
        let state = AppState::demo();
        let mut dto = OrderDto::new_for_today();
        dto.user_id = "1".into();
        dto.quantity = "3".into();
        dto.select_product("2", &state.products);
        let state = state.save_order(&dto).unwrap();
        let order = state.orders.last().unwrap();
        assert_eq!(order.supplier_id, 3);
        assert_eq!(order.total_cost, 6375.0);
    }

    #[test]
    fn test_deleting_referenced_supplier_keeps_order() {
        let state = AppState::demo().delete_supplier(2);
        assert_eq!(state.orders.len(), 2);
        assert_eq!(state.orders[0].supplier_id, 2);
        assert_eq!(state.supplier_name(state.orders[0].supplier_id), "Unknown Supplier");

        let row = order_fields::export_row(&state.orders[0], &state);
        assert_eq!(row.get("Supplier"), Some("Unknown Supplier"));
    }

    #[test]
    fn test_unknown_placeholders() {
        let state = AppState::new();
        assert_eq!(state.user_name(1), "Unknown User");
        assert_eq!(state.product_name(1), "Unknown Product");
        assert_eq!(state.supplier_name(1), "Unknown Supplier");
    }

    #[test]
    fn test_order_filter_by_user_name() {
        let state = AppState::demo();
        let fields = order_fields::search_fields(&state);
        let filters = FilterValues::new().with("userId", "John");
        let view = state.order_view(&fields, &filters, None);
        assert_eq!(view.len(), 1);
        assert_eq!(state.user_name(view[0].user_id), "Dr. John Smith");
    }

    #[test]
    fn test_order_filter_by_full_option_and_status() {
        let state = AppState::demo();
        let fields = order_fields::search_fields(&state);
        let filters = FilterValues::new()
            .with("userId", "Dr. Sarah Johnson")
            .with("status", "pending");
        let view = state.order_view(&fields, &filters, None);
        assert_eq!(view.iter().map(|o| o.id).collect::<Vec<_>>(), vec![2]);
    }

    #[test]
    fn test_order_filter_by_deleted_reference_placeholder() {
        let state = AppState::demo().delete_user(1);
        let fields = order_fields::search_fields(&state);
        let filters = FilterValues::new().with("userId", "Unknown User");
        let view = state.order_view(&fields, &filters, None);
        assert_eq!(view.iter().map(|o| o.id).collect::<Vec<_>>(), vec![1]);
    }

    #[test]
    fn test_order_date_range_filter() {
        let state = AppState::demo();
        let fields = order_fields::search_fields(&state);
        let filters = FilterValues::new()
            .with("orderDateStart", "2024-03-01")
            .with("orderDateEnd", "2024-03-01");
        let view = state.order_view(&fields, &filters, None);
        assert_eq!(view.iter().map(|o| o.id).collect::<Vec<_>>(), vec![1]);
    }

    #[test]
    fn test_order_sort_by_supplier_name() {
        // Supplier B (order 1) < Supplier C (order 2); после удаления B заказ 1
        // сортируется как "Unknown Supplier"
        let state = AppState::demo();
        let fields = order_fields::search_fields(&state);
        let sort = SortConfig::desc("supplierId");
        let view = state.order_view(&fields, &FilterValues::new(), Some(&sort));
        assert_eq!(view.iter().map(|o| o.id).collect::<Vec<_>>(), vec![2, 1]);

        let state = state.delete_supplier(2);
        let view = state.order_view(&fields, &FilterValues::new(), Some(&sort));
        assert_eq!(view.iter().map(|o| o.id).collect::<Vec<_>>(), vec![1, 2]);
    }

    #[test]
    fn test_product_view_text_filter() {
        let state = AppState::demo();
        let fields = crate::domain::a002_product::fields::search_fields();
        let filters = FilterValues::new().with("manufacturer", "gc");
        let view = state.product_view(&fields, &filters, None);
        assert_eq!(view.len(), 1);
        assert_eq!(view[0].name, "Dental Cement");
    }
}
