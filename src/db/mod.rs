use chrono::{DateTime, Duration, Utc};
use futures::TryStreamExt;
use mongodb::{
    bson::{doc, Bson, Document},
    options::{ClientOptions, ServerApi, ServerApiVersion},
    Client, Collection,
};
use std::time::Duration as StdDuration;

use crate::{config::Config, errors::AppResult};

#[derive(Clone)]
pub struct Database {
    client: Client,
    db_name: String,
}

impl Database {
    pub async fn connect(config: &Config) -> AppResult<Self> {
        let mut client_options = ClientOptions::parse(&config.mongo_conn_string).await?;

        let server_api = ServerApi::builder().version(ServerApiVersion::V1).build();
        client_options.server_api = Some(server_api);
        client_options.max_pool_size = Some(10);
        client_options.min_pool_size = Some(2);
        client_options.connect_timeout = Some(StdDuration::from_secs(5));
        client_options.server_selection_timeout = Some(StdDuration::from_secs(5));

        let client = Client::with_options(client_options)?;

        client
            .database("admin")
            .run_command(doc! { "ping": 1 })
            .await?;

        log::info!("Connected to MongoDB database '{}'", config.mongo_db_name);

        Ok(Self {
            client,
            db_name: config.mongo_db_name.clone(),
        })
    }

    pub fn get_collection<T>(&self, collection_name: &str) -> Collection<T>
    where
        T: Send + Sync,
    {
        self.client
            .database(&self.db_name)
            .collection(collection_name)
    }
}

/// Filter matching documents whose `created_at` falls on the UTC calendar
/// day of `now`.
///
/// Timestamps are stored as fixed-width RFC 3339 strings (see
/// `models::domain::timestamp`), so the day prefix bounds are enough to
/// select the day lexically.
pub fn created_on_day_filter(now: DateTime<Utc>) -> Document {
    let day = now.date_naive();
    let next_day = day + Duration::days(1);
    doc! {
        "created_at": {
            "$gte": format!("{}T", day.format("%Y-%m-%d")),
            "$lt": format!("{}T", next_day.format("%Y-%m-%d")),
        }
    }
}

/// Sums a numeric field across the whole collection. Empty collections sum to 0.
pub async fn sum_field<T>(collection: &Collection<T>, field: &str) -> AppResult<i64>
where
    T: Send + Sync,
{
    let pipeline = vec![doc! {
        "$group": { "_id": Bson::Null, "total": { "$sum": format!("${}", field) } }
    }];

    let mut cursor = collection.aggregate(pipeline).await?;
    let total = match cursor.try_next().await? {
        Some(group) => bson_as_i64(group.get("total")),
        None => 0,
    };

    Ok(total)
}

fn bson_as_i64(value: Option<&Bson>) -> i64 {
    match value {
        Some(Bson::Int32(n)) => *n as i64,
        Some(Bson::Int64(n)) => *n,
        Some(Bson::Double(n)) => *n as i64,
        _ => 0,
    }
}
