//! Built-in schemas the CLI can validate against, each with sample documents.

use chrono::Utc;
use serde_json::{Value as Json, json};
use validata_core::{ObjectValidator, Result, Schema, Validator};

const EMAIL_PATTERN: &str = r"^[^\s@]+@[^\s@]+\.[^\s@]+$";

/// One named schema with a passing and a failing sample.
pub struct CatalogEntry {
    pub name: &'static str,
    pub summary: &'static str,
    pub build: fn() -> Result<ObjectValidator>,
    pub valid_sample: fn() -> Json,
    pub invalid_sample: fn() -> Json,
}

pub fn catalog() -> &'static [CatalogEntry] {
    &CATALOG
}

pub fn find(name: &str) -> Option<&'static CatalogEntry> {
    CATALOG.iter().find(|entry| entry.name == name)
}

static CATALOG: [CatalogEntry; 5] = [
    CatalogEntry {
        name: "user-profile",
        summary: "account profile with preferences and tags",
        build: user_profile,
        valid_sample: user_profile_valid,
        invalid_sample: user_profile_invalid,
    },
    CatalogEntry {
        name: "product",
        summary: "e-commerce product with variants",
        build: product,
        valid_sample: product_valid,
        invalid_sample: product_invalid,
    },
    CatalogEntry {
        name: "create-post",
        summary: "API request creating a scheduled post",
        build: create_post,
        valid_sample: create_post_valid,
        invalid_sample: create_post_invalid,
    },
    CatalogEntry {
        name: "company",
        summary: "company address and nested departments",
        build: company,
        valid_sample: company_valid,
        invalid_sample: company_invalid,
    },
    CatalogEntry {
        name: "service-config",
        summary: "service configuration with database, cache and logging",
        build: service_config,
        valid_sample: service_config_valid,
        invalid_sample: service_config_invalid,
    },
];

fn user_profile() -> Result<ObjectValidator> {
    Ok(Schema::object()
        .field("id", Schema::string().min_length(1).with_message("User ID is required"))
        .field(
            "username",
            Schema::string()
                .min_length(3)
                .max_length(20)
                .try_pattern(r"^[a-zA-Z0-9_]+$")?
                .with_message("Username must be 3-20 characters, alphanumeric and underscores only"),
        )
        .field(
            "email",
            Schema::string()
                .try_pattern(EMAIL_PATTERN)?
                .with_message("Invalid email format"),
        )
        .field("age", Schema::number().min(13.0).max(120.0).integer().optional())
        .field("isActive", Schema::boolean())
        .field(
            "preferences",
            Schema::object()
                .field("theme", Schema::string().try_pattern(r"^(light|dark)$")?)
                .field("notifications", Schema::boolean())
                .optional(),
        )
        .field("tags", Schema::array(Schema::string()).min_length(1).max_length(10)))
}

fn user_profile_valid() -> Json {
    json!({
        "id": "user_123",
        "username": "john_doe",
        "email": "john@example.com",
        "age": 28,
        "isActive": true,
        "preferences": {"theme": "dark", "notifications": true},
        "tags": ["developer", "javascript", "typescript"]
    })
}

fn user_profile_invalid() -> Json {
    json!({
        "id": "",
        "username": "jo",
        "email": "invalid-email",
        "age": 12,
        "isActive": "yes",
        "tags": []
    })
}

fn product() -> Result<ObjectValidator> {
    let variant = Schema::object()
        .field("size", Schema::string().optional())
        .field("color", Schema::string().optional())
        .field("sku", Schema::string().min_length(1))
        .field("additionalPrice", Schema::number().min(0.0).optional());

    Ok(Schema::object()
        .field(
            "id",
            Schema::string()
                .try_pattern(r"^PROD_\d+$")?
                .with_message("Product ID must start with PROD_ followed by numbers"),
        )
        .field("name", Schema::string().min_length(1).max_length(100))
        .field(
            "description",
            Schema::string().min_length(10).max_length(1000).optional(),
        )
        .field(
            "price",
            Schema::number().min(0.0).with_message("Price must be non-negative"),
        )
        .field(
            "category",
            Schema::string().try_pattern(r"^(electronics|clothing|books|home|sports)$")?,
        )
        .field("inStock", Schema::boolean())
        .field(
            "variants",
            Schema::array(variant)
                .min_length(1)
                .with_message("At least one variant is required"),
        )
        .field("tags", Schema::array(Schema::string()).max_length(20).optional())
        .field("releaseDate", Schema::date().optional()))
}

fn product_valid() -> Json {
    json!({
        "id": "PROD_12345",
        "name": "Wireless Headphones",
        "description": "High-quality wireless headphones with noise cancellation",
        "price": 199.99,
        "category": "electronics",
        "inStock": true,
        "variants": [
            {"color": "black", "sku": "WH-001-BLK"},
            {"color": "white", "sku": "WH-001-WHT", "additionalPrice": 10}
        ],
        "tags": ["wireless", "audio", "bluetooth"],
        "releaseDate": "2023-06-01"
    })
}

fn product_invalid() -> Json {
    json!({
        "id": "PRODUCT-1",
        "name": "",
        "price": -5,
        "category": "toys",
        "inStock": true,
        "variants": []
    })
}

fn create_post() -> Result<ObjectValidator> {
    Ok(Schema::object()
        .field("title", Schema::string().min_length(1).max_length(200))
        .field("content", Schema::string().min_length(10).max_length(5000))
        .field(
            "authorId",
            Schema::string()
                .try_pattern(r"^[0-9a-f]{24}$")?
                .with_message("Invalid author ID format"),
        )
        .field("tags", Schema::array(Schema::string()).max_length(10).optional())
        .field("publishAt", Schema::date().after(Utc::now()).optional())
        .field("isPublic", Schema::boolean())
        .field(
            "metadata",
            Schema::object()
                .field("source", Schema::string().optional())
                .field("priority", Schema::number().min(1.0).max(5.0).integer().optional())
                .optional(),
        ))
}

fn create_post_valid() -> Json {
    json!({
        "title": "Getting Started with Rust",
        "content": "This is a comprehensive guide to getting started with Rust development...",
        "authorId": "507f1f77bcf86cd799439011",
        "tags": ["rust", "programming"],
        "publishAt": "2999-01-01T00:00:00Z",
        "isPublic": true,
        "metadata": {"source": "blog", "priority": 3}
    })
}

fn create_post_invalid() -> Json {
    json!({
        "title": "",
        "content": "short",
        "authorId": "xyz",
        "isPublic": "no"
    })
}

fn company() -> Result<ObjectValidator> {
    let state_code = r"^[A-Z]{2}$";
    let employee = Schema::object()
        .field("id", Schema::string().min_length(1))
        .field("name", Schema::string().min_length(1))
        .field("position", Schema::string().min_length(1))
        .field("salary", Schema::number().min(0.0).optional());
    let department = Schema::object()
        .field("name", Schema::string().min_length(1))
        .field(
            "head",
            Schema::object()
                .field("firstName", Schema::string().min_length(1))
                .field("lastName", Schema::string().min_length(1))
                .field("email", Schema::string().try_pattern(EMAIL_PATTERN)?),
        )
        .field("employees", Schema::array(employee).optional());

    Ok(Schema::object()
        .field("name", Schema::string().min_length(1))
        .field(
            "address",
            Schema::object()
                .field("street", Schema::string().min_length(1))
                .field("city", Schema::string().min_length(1))
                .field("state", Schema::string().try_pattern(state_code)?)
                .field("zipCode", Schema::string().try_pattern(r"^\d{5}(-\d{4})?$")?)
                .field("country", Schema::string().try_pattern(state_code)?),
        )
        .field("departments", Schema::array(department).min_length(1)))
}

fn company_valid() -> Json {
    json!({
        "name": "Tech Corp",
        "address": {
            "street": "123 Main St",
            "city": "San Francisco",
            "state": "CA",
            "zipCode": "94105",
            "country": "US"
        },
        "departments": [{
            "name": "Engineering",
            "head": {"firstName": "Jane", "lastName": "Smith", "email": "jane.smith@techcorp.com"},
            "employees": [
                {"id": "EMP001", "name": "John Doe", "position": "Senior Developer", "salary": 120000}
            ]
        }]
    })
}

fn company_invalid() -> Json {
    json!({
        "name": "Tech Corp",
        "address": {
            "street": "123 Main St",
            "city": "San Francisco",
            "state": "California",
            "zipCode": "94105",
            "country": "US"
        },
        "departments": [{
            "name": "Engineering",
            "head": {"firstName": "Jane", "lastName": "Smith", "email": "jane.smith"},
            "employees": [
                {"id": "EMP001", "name": "John Doe", "position": "Senior Developer", "salary": -1}
            ]
        }]
    })
}

fn service_config() -> Result<ObjectValidator> {
    Ok(Schema::object()
        .field(
            "environment",
            Schema::string().try_pattern(r"^(development|staging|production)$")?,
        )
        .field(
            "database",
            Schema::object()
                .field("host", Schema::string().min_length(1))
                .field("port", Schema::number().min(1.0).max(65535.0).integer())
                .field("username", Schema::string().min_length(1))
                .field("password", Schema::string().min_length(8))
                .field("ssl", Schema::boolean().optional()),
        )
        .field(
            "cache",
            Schema::object()
                .field("enabled", Schema::boolean())
                .field("ttl", Schema::number().min(0.0).integer().optional())
                .field(
                    "provider",
                    Schema::string().try_pattern(r"^(redis|memcached)$")?.optional(),
                )
                .optional(),
        )
        .field(
            "logging",
            Schema::object()
                .field("level", Schema::string().try_pattern(r"^(debug|info|warn|error)$")?)
                .field("format", Schema::string().try_pattern(r"^(json|text)$")?.optional()),
        ))
}

fn service_config_valid() -> Json {
    json!({
        "environment": "production",
        "database": {
            "host": "localhost",
            "port": 5432,
            "username": "app_user",
            "password": "secure_password_123",
            "ssl": true
        },
        "cache": {"enabled": true, "ttl": 3600, "provider": "redis"},
        "logging": {"level": "info", "format": "json"}
    })
}

fn service_config_invalid() -> Json {
    json!({
        "environment": "prod",
        "database": {
            "host": "localhost",
            "port": 70000,
            "username": "app_user",
            "password": "short"
        },
        "logging": {"level": "verbose"}
    })
}

/// Names of the catalog schemas, in listing order.
pub fn names() -> impl Iterator<Item = &'static str> {
    CATALOG.iter().map(|entry| entry.name)
}

#[cfg(test)]
mod tests {
    use super::*;
    use validata_core::Value;

    fn error_paths(name: &str) -> Vec<String> {
        let entry = find(name).expect("catalog entry");
        let schema = (entry.build)().expect("build schema");
        schema
            .validate(&Value::from((entry.invalid_sample)()))
            .errors
            .into_iter()
            .map(|error| error.path)
            .collect()
    }

    #[test]
    fn every_entry_accepts_valid_and_rejects_invalid_sample() {
        for entry in catalog() {
            let schema = (entry.build)().expect("build schema");
            let valid = schema.validate(&Value::from((entry.valid_sample)()));
            assert!(valid.success, "{}: {:?}", entry.name, valid.errors);
            let invalid = schema.validate(&Value::from((entry.invalid_sample)()));
            assert!(!invalid.success, "{}", entry.name);
        }
    }

    #[test]
    fn names_are_unique() {
        let mut names: Vec<_> = names().collect();
        names.sort_unstable();
        names.dedup();
        assert_eq!(names.len(), catalog().len());
    }

    #[test]
    fn user_profile_reports_each_field() {
        assert_eq!(
            error_paths("user-profile"),
            vec!["id", "username", "email", "age", "isActive", "tags"]
        );
    }

    #[test]
    fn product_variant_message_is_custom() {
        let entry = find("product").unwrap();
        let result = (entry.build)()
            .unwrap()
            .validate(&Value::from((entry.invalid_sample)()));
        let variants = result
            .errors
            .iter()
            .find(|error| error.path == "variants")
            .expect("variants error");
        assert_eq!(variants.message, "At least one variant is required");
        assert_eq!(result.errors.len(), 5);
    }

    #[test]
    fn company_errors_point_into_departments() {
        assert_eq!(
            error_paths("company"),
            vec![
                "address.state",
                "departments[0].head.email",
                "departments[0].employees[0].salary"
            ]
        );
    }

    #[test]
    fn service_config_errors() {
        assert_eq!(
            error_paths("service-config"),
            vec!["environment", "database.port", "database.password", "logging.level"]
        );
    }

    #[test]
    fn create_post_errors() {
        assert_eq!(
            error_paths("create-post"),
            vec!["title", "content", "authorId", "isPublic"]
        );
    }
}
