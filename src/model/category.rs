use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct CategoryDto {
    pub slug: String,
    pub description: String,
}

impl CategoryDto {
    /// Converts the entity model to its API representation.
    pub fn from_entity(entity: entity::category::Model) -> Self {
        Self {
            slug: entity.slug,
            description: entity.description,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct CategoriesResponseDto {
    pub categories: Vec<CategoryDto>,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct CategoryResponseDto {
    pub category: CategoryDto,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct CreateCategoryDto {
    pub slug: String,
    pub description: String,
}

/// Parameters for creating a category.
#[derive(Debug, Clone)]
pub struct CreateCategoryParams {
    pub slug: String,
    pub description: String,
}

impl CreateCategoryParams {
    /// Converts the request DTO to operation parameters.
    pub fn from_dto(dto: CreateCategoryDto) -> Self {
        Self {
            slug: dto.slug,
            description: dto.description,
        }
    }
}
