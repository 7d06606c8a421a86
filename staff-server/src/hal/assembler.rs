//! Response assembly
//!
//! Links are absolute and rooted at the configured public base URL, so a
//! deployment behind a path prefix (`https://host/staff`) keeps working.

use shared::models::{
    CollectionView, EmployeeDraft, EmployeeView, EmployeeWithRole, Embeddable, Link, Links, Role,
    RoleView,
};
use thiserror::Error;
use url::Url;

#[derive(Debug, Error)]
pub enum BaseUrlError {
    #[error("invalid base url: {0}")]
    Parse(#[from] url::ParseError),

    #[error("base url cannot carry a path: {0}")]
    NotABase(String),
}

#[derive(Debug, Clone)]
pub struct ResponseAssembler {
    base: Url,
}

impl ResponseAssembler {
    pub fn new(base: &str) -> Result<Self, BaseUrlError> {
        let mut base = Url::parse(base)?;
        if base.cannot_be_a_base() {
            return Err(BaseUrlError::NotABase(base.to_string()));
        }
        base.set_query(None);
        base.set_fragment(None);
        Ok(Self { base })
    }

    fn href(&self, segments: &[&str], query: Option<(&str, &str)>) -> String {
        let mut url = self.base.clone();
        if let Ok(mut path) = url.path_segments_mut() {
            path.pop_if_empty().extend(segments);
        }
        if let Some((key, value)) = query {
            url.query_pairs_mut().append_pair(key, value);
        }
        url.into()
    }

    // ── hrefs ───────────────────────────────────────────────────────

    pub fn employees_href(&self) -> String {
        self.href(&["employees"], None)
    }

    pub fn employee_href(&self, id: i64) -> String {
        self.href(&["employees", &id.to_string()], None)
    }

    pub fn employees_by_role_id_href(&self, role_id: i64) -> String {
        self.href(&["employees", "roleid", &role_id.to_string()], None)
    }

    pub fn employees_by_role_path_href(&self, job_title: &str) -> String {
        self.href(&["employees", "role", job_title], None)
    }

    pub fn employees_by_role_param_href(&self, job_title: &str) -> String {
        self.href(&["employees", "role"], Some(("job", job_title)))
    }

    pub fn roles_href(&self) -> String {
        self.href(&["roles"], None)
    }

    pub fn role_href(&self, id: i64) -> String {
        self.href(&["roles", &id.to_string()], None)
    }

    // ── links ───────────────────────────────────────────────────────

    /// Every operation reachable from an employee
    pub fn employee_links(&self, item: &EmployeeWithRole) -> Links {
        let id = item.employee.id;
        let title = item.role.job_title.title();
        Links::new()
            .with("self", Link::new(self.employee_href(id)))
            .with("all", Link::new(self.employees_href()))
            .with(
                "create",
                Link::titled(self.employees_href(), EmployeeDraft::SUBMISSION_SHAPE),
            )
            .with(
                "update",
                Link::titled(self.employee_href(id), EmployeeDraft::SUBMISSION_SHAPE),
            )
            .with("delete", Link::new(self.employee_href(id)))
            .with("getByRoleId", Link::new(self.employees_by_role_id_href(item.role.id)))
            .with(
                "getByRolePathVariable",
                Link::new(self.employees_by_role_path_href(title)),
            )
            .with(
                "getByRoleRequestParam",
                Link::new(self.employees_by_role_param_href(title)),
            )
    }

    pub fn role_links(&self, role: &Role) -> Links {
        Links::new()
            .with("self", Link::new(self.role_href(role.id)))
            .with("all", Link::new(self.roles_href()))
            .with("employees", Link::new(self.employees_by_role_id_href(role.id)))
    }

    // ── views ───────────────────────────────────────────────────────

    /// Title and salary always come from the resolved role
    pub fn employee_view(&self, item: &EmployeeWithRole) -> EmployeeView {
        EmployeeView {
            id: item.employee.id,
            first_name: item.employee.first_name.clone(),
            last_name: item.employee.last_name.clone(),
            job_title: item.role.job_title.title().to_string(),
            annual_salary: item.role.annual_salary,
            links: self.employee_links(item),
        }
    }

    pub fn role_view(&self, role: &Role) -> RoleView {
        RoleView {
            id: role.id,
            job_title: role.job_title.title().to_string(),
            annual_salary: role.annual_salary,
            links: self.role_links(role),
        }
    }

    pub fn employee_collection(
        &self,
        items: &[EmployeeWithRole],
        self_href: String,
    ) -> CollectionView<EmployeeView> {
        self.collection(items.iter().map(|e| self.employee_view(e)), self_href)
    }

    pub fn role_collection(&self, roles: &[Role]) -> CollectionView<RoleView> {
        self.collection(roles.iter().map(|r| self.role_view(r)), self.roles_href())
    }

    fn collection<T: Embeddable>(
        &self,
        items: impl Iterator<Item = T>,
        self_href: String,
    ) -> CollectionView<T> {
        CollectionView {
            items: items.collect(),
            links: Links::new().with("self", Link::new(self_href)),
        }
    }
}
