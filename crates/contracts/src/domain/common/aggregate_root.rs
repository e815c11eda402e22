/// Идентификатор записи любого агрегата
pub type EntityId = i64;

/// Трейт для корня агрегата
///
/// Определяет обязательные методы и метаданные для всех агрегатов системы
pub trait AggregateRoot {
    // ============================================================================
    // Методы экземпляра (данные конкретной записи)
    // ============================================================================

    /// Получить ID записи
    fn id(&self) -> EntityId;

    /// Отображаемое имя записи (используется при поиске по ссылке)
    fn display_name(&self) -> &str;

    // ============================================================================
    // Метаданные класса агрегата (статические данные)
    // ============================================================================

    /// Имя коллекции (например, "suppliers"), совпадает с таблицей демо-схемы
    fn collection_name() -> &'static str;

    /// Имя элемента для UI (единственное число, например, "Supplier")
    fn element_name() -> &'static str;

    /// Имя списка для UI (множественное число, например, "Suppliers")
    fn list_name() -> &'static str;
}

/// Заглушка для ссылки, которая не разрешилась: "Unknown Supplier" и т.п.
pub fn unknown_placeholder<A: AggregateRoot>() -> String {
    format!("Unknown {}", A::element_name())
}

/// Найти запись по ID линейным просмотром списка
pub fn find_by_id<A: AggregateRoot>(items: &[A], id: EntityId) -> Option<&A> {
    items.iter().find(|item| item.id() == id)
}

/// Имя записи по ID, либо заглушка "Unknown <Element>"
pub fn resolve_name<A: AggregateRoot>(items: &[A], id: EntityId) -> String {
    find_by_id(items, id)
        .map(|item| item.display_name().to_string())
        .unwrap_or_else(unknown_placeholder::<A>)
}
