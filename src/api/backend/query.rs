use std::fmt::Display;

/* PostgREST query on one table: filters and ordering end up in the query string.
https://postgrest.org/en/stable/references/api/tables_views.html
*/
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Query {
    table: String,
    params: Vec<(String, String)>,
}

impl Query {
    pub fn from(table: &str) -> Self {
        Query {
            table: table.to_string(),
            params: Vec::new(),
        }
    }

    pub fn select(mut self, columns: &str) -> Self {
        self.params.push(("select".to_string(), columns.to_string()));
        self
    }

    pub fn eq(mut self, column: &str, value: impl Display) -> Self {
        self.params.push((column.to_string(), format!("eq.{value}")));
        self
    }

    pub fn order(mut self, column: &str, descending: bool) -> Self {
        let direction = if descending { "desc" } else { "asc" };
        self.params
            .push(("order".to_string(), format!("{column}.{direction}")));
        self
    }

    pub fn table(&self) -> &str {
        &self.table
    }

    pub fn to_query_string(&self) -> String {
        form_urlencoded::Serializer::new(String::new())
            .extend_pairs(&self.params)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use uuid::Uuid;

    use super::*;

    #[test]
    fn test_creators_query() {
        let query = Query::from("profiles").select("*").eq("role", "creator");
        assert_eq!(query.table(), "profiles");
        assert_eq!(query.to_query_string(), "select=*&role=eq.creator");
    }

    #[test]
    fn test_transactions_query() {
        let user_id = Uuid::parse_str("8f14e45f-ceea-467f-a0f5-7a1c5b0e6c11").unwrap();
        let query = Query::from("transactions")
            .select("*")
            .eq("user_id", user_id)
            .order("created_at", true);
        assert_eq!(
            query.to_query_string(),
            "select=*&user_id=eq.8f14e45f-ceea-467f-a0f5-7a1c5b0e6c11&order=created_at.desc"
        );
    }

    #[test]
    fn test_values_are_encoded() {
        let query = Query::from("waitlist").eq("email", "a+b@example.com");
        assert_eq!(query.to_query_string(), "email=eq.a%2Bb%40example.com");
    }
}
