use utoipa::openapi::security::{HttpAuthScheme, HttpBuilder, SecurityScheme};
use utoipa::{Modify, OpenApi};

use crate::modules::auth::controller::ErrorResponse;
use crate::modules::auth::model::AddUserDto;
use crate::modules::blogs::model::{
    Blog, BlogFilterParams, BlogStatus, CreateBlogDto, PaginatedBlogsResponse,
};
use crate::modules::contacts::model::{Contact, CreateContactDto, PaginatedContactsResponse};
use crate::modules::donations::model::{
    CreateDonationRequestDto, DonationFilterParams, DonationRequest, DonationStatus,
    PaginatedDonationsResponse, UpdateDonationStatusDto, UpdateOutcome,
};
use crate::modules::donors::model::DonorSummary;
use crate::modules::fundings::model::{
    CreateFundingDto, Funding, FundingTotal, PaginatedFundingsResponse,
};
use crate::modules::payments::model::{CreatePaymentIntentDto, PaymentIntentResponse};
use crate::modules::products::model::{
    CreateProductDto, EditProductDto, PaginatedProductsResponse, Product, ProductFilterParams,
    ProductStatus, UpdateStockDto,
};
use crate::modules::users::model::{
    PaginatedUsersResponse, RequestMerchantDto, RoleRequestStatus, RoleRequestType, UpdateRoleDto,
    UpdateStatusDto, User, UserFilterParams, UserRole, UserStatus,
};
use crate::utils::errors::FieldViolation;
use crate::utils::pagination::{PaginationMeta, PaginationParams};

#[derive(OpenApi)]
#[openapi(
    paths(
        crate::modules::auth::controller::add_user,
        crate::modules::auth::controller::me,
        crate::modules::auth::controller::request_merchant,
        crate::modules::users::controller::get_users,
        crate::modules::users::controller::approve_merchant,
        crate::modules::users::controller::reject_merchant,
        crate::modules::users::controller::update_role,
        crate::modules::users::controller::update_status,
        crate::modules::users::controller::delete_user,
        crate::modules::donors::controller::search_donors,
        crate::modules::donors::controller::search_donors_dynamic,
        crate::modules::donations::controller::create_donation_request,
        crate::modules::donations::controller::get_donation_requests,
        crate::modules::donations::controller::get_donation_request,
        crate::modules::donations::controller::respond_to_donation_request,
        crate::modules::donations::controller::update_donation_status,
        crate::modules::donations::controller::delete_donation_request,
        crate::modules::products::controller::create_product,
        crate::modules::products::controller::get_products,
        crate::modules::products::controller::get_product,
        crate::modules::products::controller::update_stock,
        crate::modules::products::controller::stock_out,
        crate::modules::products::controller::edit_product,
        crate::modules::products::controller::delete_product,
        crate::modules::blogs::controller::create_blog,
        crate::modules::blogs::controller::get_blogs,
        crate::modules::blogs::controller::get_blog,
        crate::modules::blogs::controller::publish_blog,
        crate::modules::blogs::controller::delete_blog,
        crate::modules::fundings::controller::create_funding,
        crate::modules::fundings::controller::get_fundings,
        crate::modules::fundings::controller::get_funding_total,
        crate::modules::payments::controller::create_payment_intent,
        crate::modules::contacts::controller::create_contact,
        crate::modules::contacts::controller::get_contacts,
    ),
    components(
        schemas(
            ErrorResponse,
            FieldViolation,
            User,
            UserRole,
            UserStatus,
            RoleRequestType,
            RoleRequestStatus,
            AddUserDto,
            RequestMerchantDto,
            UpdateRoleDto,
            UpdateStatusDto,
            UserFilterParams,
            PaginatedUsersResponse,
            DonorSummary,
            DonationRequest,
            DonationStatus,
            CreateDonationRequestDto,
            UpdateDonationStatusDto,
            DonationFilterParams,
            PaginatedDonationsResponse,
            UpdateOutcome,
            Product,
            ProductStatus,
            CreateProductDto,
            UpdateStockDto,
            EditProductDto,
            ProductFilterParams,
            PaginatedProductsResponse,
            Blog,
            BlogStatus,
            CreateBlogDto,
            BlogFilterParams,
            PaginatedBlogsResponse,
            Funding,
            CreateFundingDto,
            PaginatedFundingsResponse,
            FundingTotal,
            CreatePaymentIntentDto,
            PaymentIntentResponse,
            Contact,
            CreateContactDto,
            PaginatedContactsResponse,
            PaginationMeta,
            PaginationParams,
        )
    ),
    modifiers(&SecurityAddon),
    tags(
        (name = "Authentication", description = "Identity resolution and role requests"),
        (name = "Admin", description = "User management and request review"),
        (name = "Donors", description = "Public donor search"),
        (name = "Donations", description = "Donation request lifecycle"),
        (name = "Products", description = "Merchant product management"),
        (name = "Blogs", description = "Blog publishing"),
        (name = "Fundings", description = "Funding records and totals"),
        (name = "Payments", description = "Payment intent creation"),
        (name = "Contacts", description = "Contact mailbox")
    ),
    info(
        title = "Lifelink API",
        version = "0.1.0",
        description = "A blood-donation coordination and marketplace REST API built with Rust, Axum, and PostgreSQL.",
        contact(
            name = "API Support",
            email = "support@lifelink.example"
        ),
        license(
            name = "MIT"
        )
    )
)]
pub struct ApiDoc;

struct SecurityAddon;

impl Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        if let Some(components) = openapi.components.as_mut() {
            components.add_security_scheme(
                "bearer_auth",
                SecurityScheme::Http(
                    HttpBuilder::new()
                        .scheme(HttpAuthScheme::Bearer)
                        .bearer_format("JWT")
                        .build(),
                ),
            )
        }
    }
}
