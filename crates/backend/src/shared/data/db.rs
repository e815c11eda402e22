use contracts::domain::common::find_by_id;
use contracts::shared::store::AppState;
use once_cell::sync::OnceCell;
use sea_orm::{ConnectionTrait, Database, DatabaseBackend, DatabaseConnection, Statement};
use std::path::Path;

use crate::domain::{a001_supplier, a002_product, a003_user, a004_order};

static DB_CONN: OnceCell<DatabaseConnection> = OnceCell::new();

/// Демо-схема: четыре таблицы, никогда не читается работающим приложением
const SCHEMA: &[&str] = &[
    r#"
    CREATE TABLE IF NOT EXISTS suppliers (
        id INTEGER PRIMARY KEY AUTOINCREMENT,
        name TEXT NOT NULL UNIQUE
    );
    "#,
    r#"
    CREATE TABLE IF NOT EXISTS products (
        id INTEGER PRIMARY KEY AUTOINCREMENT,
        name TEXT NOT NULL,
        category TEXT NOT NULL,
        manufacturer TEXT,
        referenceNumber TEXT,
        unit TEXT,
        suppliers TEXT
    );
    "#,
    r#"
    CREATE TABLE IF NOT EXISTS users (
        id INTEGER PRIMARY KEY AUTOINCREMENT,
        name TEXT NOT NULL,
        department TEXT,
        email TEXT UNIQUE
    );
    "#,
    r#"
    CREATE TABLE IF NOT EXISTS orders (
        id INTEGER PRIMARY KEY AUTOINCREMENT,
        userId INTEGER NOT NULL,
        productId INTEGER NOT NULL,
        quantity INTEGER NOT NULL,
        orderDate TEXT NOT NULL,
        deliveryDate TEXT NOT NULL,
        supplierId INTEGER NOT NULL,
        supplierPrice REAL NOT NULL,
        referenceNumber TEXT,
        unit TEXT,
        status TEXT NOT NULL DEFAULT 'pending',
        FOREIGN KEY (userId) REFERENCES users(id),
        FOREIGN KEY (productId) REFERENCES products(id),
        FOREIGN KEY (supplierId) REFERENCES suppliers(id)
    );
    "#,
];

/// sqlite URL для файла; каталог создаётся при необходимости
pub fn sqlite_url(db_file: &Path) -> anyhow::Result<String> {
    if let Some(parent) = db_file.parent() {
        std::fs::create_dir_all(parent)?;
    }
    let absolute_path = if db_file.is_absolute() {
        db_file.to_path_buf()
    } else {
        std::env::current_dir()?.join(db_file)
    };
    // Normalize path separators and ensure proper URL form on Windows
    let normalized = absolute_path.to_string_lossy().replace('\\', "/");
    let needs_leading_slash = !normalized.starts_with('/') && normalized.contains(':');
    let prefix = if needs_leading_slash { "/" } else { "" };
    Ok(format!("sqlite://{}{}?mode=rwc", prefix, normalized))
}

pub async fn connect(db_file: &Path) -> anyhow::Result<DatabaseConnection> {
    let db_url = sqlite_url(db_file)?;
    tracing::info!("Connecting to {}", db_url);
    Ok(Database::connect(&db_url).await?)
}

/// Создать таблицы, если их нет
pub async fn bootstrap_schema(conn: &DatabaseConnection) -> anyhow::Result<()> {
    for sql in SCHEMA {
        conn.execute(Statement::from_string(DatabaseBackend::Sqlite, sql.to_string()))
            .await?;
    }
    Ok(())
}

/// Засеять демо-данные один раз. Возвращает `false`, если таблицы уже
/// заполнены.
pub async fn seed_demo_data(conn: &DatabaseConnection, demo: &AppState) -> anyhow::Result<bool> {
    if a001_supplier::repository::count(conn).await? > 0 {
        tracing::info!("Demo data already present, skipping seed");
        return Ok(false);
    }

    for supplier in &demo.suppliers {
        a001_supplier::repository::insert(conn, supplier).await?;
    }
    for product in &demo.products {
        a002_product::repository::insert(conn, product).await?;
    }
    for user in &demo.users {
        a003_user::repository::insert(conn, user).await?;
    }
    for order in &demo.orders {
        let product = find_by_id(&demo.products, order.product_id);
        a004_order::repository::insert(
            conn,
            order,
            product.map(|p| p.reference_number.clone()),
            product.map(|p| p.unit.clone()),
        )
        .await?;
    }

    tracing::info!(
        "Seeded demo data: {} suppliers, {} products, {} users, {} orders",
        demo.suppliers.len(),
        demo.products.len(),
        demo.users.len(),
        demo.orders.len()
    );
    Ok(true)
}

/// Прочитать демо-схему целиком
pub async fn load_state(conn: &DatabaseConnection) -> anyhow::Result<AppState> {
    Ok(AppState::new()
        .with_suppliers(a001_supplier::repository::list_all(conn).await?)
        .with_products(a002_product::repository::list_all(conn).await?)
        .with_users(a003_user::repository::list_all(conn).await?)
        .with_orders(a004_order::repository::list_all(conn).await?))
}

/// Подключиться, создать схему и засеять демо-данные
pub async fn initialize_database(db_file: &Path) -> anyhow::Result<()> {
    let conn = connect(db_file).await?;
    bootstrap_schema(&conn).await?;
    seed_demo_data(&conn, &AppState::demo()).await?;

    DB_CONN
        .set(conn)
        .map_err(|_| anyhow::anyhow!("Failed to set DB_CONN"))?;
    Ok(())
}

pub fn get_connection() -> anyhow::Result<&'static DatabaseConnection> {
    DB_CONN
        .get()
        .ok_or_else(|| anyhow::anyhow!("Database connection has not been initialized"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    fn temp_db(name: &str) -> PathBuf {
        let nanos = std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .map(|d| d.as_nanos())
            .unwrap_or_default();
        std::env::temp_dir().join(format!("dental-admin-{}-{}.db", name, nanos))
    }

    #[test]
    fn test_sqlite_url_for_absolute_path() {
        let dir = std::env::temp_dir().join("dental-admin-url");
        let url = sqlite_url(&dir.join("app.db")).unwrap();
        assert!(url.starts_with("sqlite://"));
        assert!(url.ends_with("app.db?mode=rwc"));
    }

    #[tokio::test]
    async fn test_bootstrap_and_seed_round_trip() {
        let path = temp_db("seed");
        let conn = connect(&path).await.unwrap();
        bootstrap_schema(&conn).await.unwrap();

        let demo = AppState::demo();
        assert!(seed_demo_data(&conn, &demo).await.unwrap());

        let loaded = load_state(&conn).await.unwrap();
        assert_eq!(loaded.suppliers, demo.suppliers);
        assert_eq!(loaded.products, demo.products);
        assert_eq!(loaded.users, demo.users);
        assert_eq!(loaded.orders, demo.orders);

        let _ = std::fs::remove_file(&path);
    }

    #[tokio::test]
    async fn test_bootstrap_is_idempotent_and_seeds_once() {
        let path = temp_db("idempotent");
        let conn = connect(&path).await.unwrap();
        let demo = AppState::demo();

        bootstrap_schema(&conn).await.unwrap();
        assert!(seed_demo_data(&conn, &demo).await.unwrap());

        bootstrap_schema(&conn).await.unwrap();
        assert!(!seed_demo_data(&conn, &demo).await.unwrap());

        let loaded = load_state(&conn).await.unwrap();
        assert_eq!(loaded.suppliers.len(), 3);
        assert_eq!(loaded.orders.len(), 2);

        let _ = std::fs::remove_file(&path);
    }
}
