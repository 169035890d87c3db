//! In-memory repositories.
//!
//! These answer with the same statuses as the real backend and are used
//! by the demo mode and by controller tests. Both support injecting a
//! one-shot failure with `fail_next`.

use std::cmp::Ordering;
use std::collections::{BTreeMap, HashMap};

use futures::future::BoxFuture;
use tokio::sync::RwLock;
use tracing::debug;

use crate::error::{ApiError, Result};
use crate::repository::{AuthRepository, ProductRepository};
use crate::types::{
    Account, Page, PageQuery, Product, ProductInput, SortDirection, SortField, UserSession,
};

/// A repository call, as recorded by [`InMemoryProductRepository`].
#[derive(Debug, Clone, PartialEq)]
pub enum Call {
    List(PageQuery),
    Get(i64),
    Create(ProductInput),
    Update(i64, ProductInput),
    Delete(i64),
}

#[derive(Debug, Default)]
struct ProductState {
    products: BTreeMap<i64, Product>,
    next_id: i64,
    failure: Option<ApiError>,
    calls: Vec<Call>,
}

impl ProductState {
    fn record(&mut self, call: Call) -> Result<()> {
        debug!(?call, "in-memory product call");
        self.calls.push(call);
        match self.failure.take() {
            Some(err) => Err(err),
            None => Ok(()),
        }
    }

    fn not_found(id: i64) -> ApiError {
        ApiError::status(404, Some(&format!("product {id} not found")))
    }
}

/// [`ProductRepository`] holding products in memory.
#[derive(Debug, Default)]
pub struct InMemoryProductRepository {
    state: RwLock<ProductState>,
}

impl InMemoryProductRepository {
    /// Creates an empty repository.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a repository seeded with `inputs`, assigning ids from 1.
    pub fn with_products(inputs: impl IntoIterator<Item = ProductInput>) -> Self {
        let mut state = ProductState::default();
        for input in inputs {
            state.next_id += 1;
            let id = state.next_id;
            state.products.insert(id, input.into_product(id));
        }
        Self {
            state: RwLock::new(state),
        }
    }

    /// Makes the next call fail with `status`.
    pub async fn fail_next(&self, status: u16, message: Option<&str>) {
        self.state.write().await.failure = Some(ApiError::status(status, message));
    }

    /// Returns every call received so far.
    pub async fn calls(&self) -> Vec<Call> {
        self.state.read().await.calls.clone()
    }

    /// Returns all stored products ordered by id.
    pub async fn snapshot(&self) -> Vec<Product> {
        self.state.read().await.products.values().cloned().collect()
    }
}

fn compare(a: &Product, b: &Product, field: SortField) -> Ordering {
    let ordering = match field {
        SortField::Id => a.id.cmp(&b.id),
        SortField::ProductName => a.product_name.cmp(&b.product_name),
        SortField::Price => a.price.total_cmp(&b.price),
        SortField::Quantity => a.quantity.cmp(&b.quantity),
    };
    ordering.then(a.id.cmp(&b.id))
}

fn paginate(mut products: Vec<Product>, query: PageQuery) -> Result<Page<Product>> {
    if query.limit == 0 {
        return Err(ApiError::status(400, Some("limit must be positive")));
    }

    products.sort_by(|a, b| compare(a, b, query.sort_by));
    if query.sort_dir == SortDirection::Desc {
        products.reverse();
    }

    let total_elements = products.len() as u64;
    let limit = query.limit as usize;
    let total_pages = products.len().div_ceil(limit) as u32;
    let content = products
        .into_iter()
        .skip((query.page as usize).saturating_mul(limit))
        .take(limit)
        .collect();

    Ok(Page {
        content,
        total_pages,
        total_elements,
        number: query.page,
        size: query.limit,
    })
}

impl ProductRepository for InMemoryProductRepository {
    fn list(&self, query: PageQuery) -> BoxFuture<'_, Result<Page<Product>>> {
        Box::pin(async move {
            let mut state = self.state.write().await;
            state.record(Call::List(query))?;
            paginate(state.products.values().cloned().collect(), query)
        })
    }

    fn get(&self, id: i64) -> BoxFuture<'_, Result<Product>> {
        Box::pin(async move {
            let mut state = self.state.write().await;
            state.record(Call::Get(id))?;
            state
                .products
                .get(&id)
                .cloned()
                .ok_or_else(|| ProductState::not_found(id))
        })
    }

    fn create<'a>(&'a self, input: &'a ProductInput) -> BoxFuture<'a, Result<Product>> {
        Box::pin(async move {
            let mut state = self.state.write().await;
            state.record(Call::Create(input.clone()))?;
            state.next_id += 1;
            let id = state.next_id;
            let product = input.clone().into_product(id);
            state.products.insert(id, product.clone());
            Ok(product)
        })
    }

    fn update<'a>(&'a self, id: i64, input: &'a ProductInput) -> BoxFuture<'a, Result<Product>> {
        Box::pin(async move {
            let mut state = self.state.write().await;
            state.record(Call::Update(id, input.clone()))?;
            let slot = state
                .products
                .get_mut(&id)
                .ok_or_else(|| ProductState::not_found(id))?;
            *slot = input.clone().into_product(id);
            Ok(slot.clone())
        })
    }

    fn delete(&self, id: i64) -> BoxFuture<'_, Result<()>> {
        Box::pin(async move {
            let mut state = self.state.write().await;
            state.record(Call::Delete(id))?;
            state
                .products
                .remove(&id)
                .map(|_| ())
                .ok_or_else(|| ProductState::not_found(id))
        })
    }
}

#[derive(Debug, Default)]
struct AuthState {
    users: HashMap<String, (String, String)>,
    session: Option<UserSession>,
    next_id: u64,
    failure: Option<ApiError>,
}

impl AuthState {
    fn take_failure(&mut self) -> Result<()> {
        match self.failure.take() {
            Some(err) => Err(err),
            None => Ok(()),
        }
    }

    fn insert(&mut self, username: &str, password: &str) {
        self.next_id += 1;
        let id = self.next_id.to_string();
        self.users
            .insert(username.to_string(), (id, password.to_string()));
    }
}

/// [`AuthRepository`] holding accounts and a single session in memory.
#[derive(Debug, Default)]
pub struct InMemoryAuthRepository {
    state: RwLock<AuthState>,
}

impl InMemoryAuthRepository {
    /// Creates a repository with no accounts.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a repository with one existing account.
    pub fn with_user(username: &str, password: &str) -> Self {
        let mut state = AuthState::default();
        state.insert(username, password);
        Self {
            state: RwLock::new(state),
        }
    }

    /// Makes the next call fail with `status`.
    pub async fn fail_next(&self, status: u16, message: Option<&str>) {
        self.state.write().await.failure = Some(ApiError::status(status, message));
    }

    /// Returns the signed-in user, if any.
    pub async fn session(&self) -> Option<UserSession> {
        self.state.read().await.session.clone()
    }
}

impl AuthRepository for InMemoryAuthRepository {
    fn login<'a>(
        &'a self,
        username: &'a str,
        password: &'a str,
    ) -> BoxFuture<'a, Result<UserSession>> {
        Box::pin(async move {
            let mut state = self.state.write().await;
            state.take_failure()?;
            if username.trim().is_empty() || password.trim().is_empty() {
                return Err(ApiError::status(400, Some("invalid username or password")));
            }
            let (id, stored) = state
                .users
                .get(username)
                .cloned()
                .ok_or_else(|| ApiError::status(404, Some("user not found")))?;
            if stored != password {
                return Err(ApiError::status(401, Some("wrong password")));
            }
            let user = UserSession {
                id,
                username: username.to_string(),
            };
            debug!(username, "in-memory login");
            state.session = Some(user.clone());
            Ok(user)
        })
    }

    fn current_user(&self) -> BoxFuture<'_, Result<UserSession>> {
        Box::pin(async move {
            let mut state = self.state.write().await;
            state.take_failure()?;
            state
                .session
                .clone()
                .ok_or_else(|| ApiError::status(401, None))
        })
    }

    fn register<'a>(
        &'a self,
        username: &'a str,
        password: &'a str,
        confirm_password: &'a str,
    ) -> BoxFuture<'a, Result<Account>> {
        Box::pin(async move {
            let mut state = self.state.write().await;
            state.take_failure()?;
            if [username, password, confirm_password]
                .iter()
                .any(|v| v.trim().is_empty())
            {
                return Err(ApiError::status(400, None));
            }
            if state.users.contains_key(username) {
                return Err(ApiError::status(409, None));
            }
            if password != confirm_password {
                return Err(ApiError::status(400, None));
            }
            state.insert(username, password);
            Ok(Account {
                username: username.to_string(),
            })
        })
    }

    fn logout(&self) -> BoxFuture<'_, Result<()>> {
        Box::pin(async move {
            let mut state = self.state.write().await;
            state.take_failure()?;
            state.session = None;
            Ok(())
        })
    }
}
