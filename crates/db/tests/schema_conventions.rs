use sqlx::PgPool;

/// All `id` columns must be bigint (entity tables) or smallint (lookup tables).
#[sqlx::test(migrations = "../../db/migrations")]
async fn test_all_pks_are_correct_type(pool: PgPool) {
    let rows: Vec<(String, String)> = sqlx::query_as(
        "SELECT table_name::TEXT, data_type::TEXT
         FROM information_schema.columns
         WHERE column_name = 'id'
           AND table_schema = 'public'
           AND table_name != '_sqlx_migrations'
         ORDER BY table_name",
    )
    .fetch_all(&pool)
    .await
    .unwrap();

    for (table, data_type) in &rows {
        assert!(
            data_type == "bigint" || data_type == "smallint",
            "Table {table}.id should be bigint or smallint, got {data_type}"
        );
    }
}

/// Every table must carry `created_at` and `updated_at` as timestamptz.
#[sqlx::test(migrations = "../../db/migrations")]
async fn test_all_tables_have_timestamps(pool: PgPool) {
    let missing: Vec<(String, String)> = sqlx::query_as(
        "SELECT t.table_name::TEXT, c.col
         FROM information_schema.tables t
         CROSS JOIN (VALUES ('created_at'), ('updated_at')) AS c(col)
         WHERE t.table_schema = 'public'
           AND t.table_type = 'BASE TABLE'
           AND t.table_name != '_sqlx_migrations'
           AND NOT EXISTS (
               SELECT 1 FROM information_schema.columns ic
               WHERE ic.table_schema = 'public'
                 AND ic.table_name = t.table_name
                 AND ic.column_name = c.col
                 AND ic.data_type = 'timestamp with time zone'
           )
         ORDER BY 1, 2",
    )
    .fetch_all(&pool)
    .await
    .unwrap();

    assert!(missing.is_empty(), "Missing timestamptz columns: {missing:?}");
}

/// Money columns are DOUBLE PRECISION everywhere.
#[sqlx::test(migrations = "../../db/migrations")]
async fn test_money_columns_are_double_precision(pool: PgPool) {
    let rows: Vec<(String, String, String)> = sqlx::query_as(
        "SELECT table_name::TEXT, column_name::TEXT, data_type::TEXT
         FROM information_schema.columns
         WHERE table_schema = 'public'
           AND column_name IN ('nightly_rate', 'total_charge', 'amount', 'unit_price', 'total_price')
         ORDER BY table_name, column_name",
    )
    .fetch_all(&pool)
    .await
    .unwrap();

    assert_eq!(rows.len(), 5);
    for (table, column, data_type) in &rows {
        assert_eq!(
            data_type, "double precision",
            "{table}.{column} should be double precision"
        );
    }
}

/// Every foreign key column must have a corresponding index.
#[sqlx::test(migrations = "../../db/migrations")]
async fn test_all_fks_have_indexes(pool: PgPool) {
    let fk_columns: Vec<(String, String)> = sqlx::query_as(
        "SELECT DISTINCT
             tc.table_name::TEXT,
             kcu.column_name::TEXT
         FROM information_schema.table_constraints tc
         JOIN information_schema.key_column_usage kcu
             ON tc.constraint_name = kcu.constraint_name
             AND tc.table_schema = kcu.table_schema
         WHERE tc.constraint_type = 'FOREIGN KEY'
           AND tc.table_schema = 'public'
         ORDER BY tc.table_name, kcu.column_name",
    )
    .fetch_all(&pool)
    .await
    .unwrap();

    for (table, column) in &fk_columns {
        let has_index: (bool,) = sqlx::query_as(&format!(
            "SELECT EXISTS (
                SELECT 1
                FROM pg_indexes
                WHERE schemaname = 'public'
                  AND tablename = '{table}'
                  AND indexdef LIKE '%({column})%'
            )"
        ))
        .fetch_one(&pool)
        .await
        .unwrap();

        assert!(has_index.0, "FK column {table}.{column} has no index");
    }
}

/// Lookup seed rows must line up with the enum discriminants in `hotel_core::status`.
#[sqlx::test(migrations = "../../db/migrations")]
async fn test_lookup_seeds_match_status_enums(pool: PgPool) {
    use hotel_core::status::{PaymentMethod, ReservationStatus, RoomStatus};

    for status in RoomStatus::ALL {
        let (name,): (String,) = sqlx::query_as("SELECT name FROM room_statuses WHERE id = $1")
            .bind(status.id())
            .fetch_one(&pool)
            .await
            .unwrap();
        assert_eq!(name, status.label());
    }
    for status in ReservationStatus::ALL {
        let (name,): (String,) =
            sqlx::query_as("SELECT name FROM reservation_statuses WHERE id = $1")
                .bind(status.id())
                .fetch_one(&pool)
                .await
                .unwrap();
        assert_eq!(name, status.label());
    }
    for method in PaymentMethod::ALL {
        let (name,): (String,) = sqlx::query_as("SELECT name FROM payment_methods WHERE id = $1")
            .bind(method.id())
            .fetch_one(&pool)
            .await
            .unwrap();
        assert_eq!(name, method.label());
    }
}
