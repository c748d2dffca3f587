//! OpenAPI documentation of the HTTP API.
//!
//! [`ApiDoc`] collects the `#[utoipa::path]` annotations of every controller and the
//! DTO schemas they reference. The document is served at `/api-docs/openapi.json`.

use utoipa::OpenApi;

use crate::model::{
    api::{DeleteResultDto, ErrorDto, InsertOneResultDto, UpdateResultDto},
    loan::{LoanDto, LoanInputDto},
    loan_application::{ApplyLoanDto, LoanApplicationDto},
    payment::{CreatePaymentIntentDto, PaymentIntentDto},
    user::{SetRoleDto, UpsertUserDto, UserDto, UserRoleDto},
};

#[derive(OpenApi)]
#[openapi(
    info(
        title = "LoanLink API",
        description = "Loan catalog, borrower applications, user roles and card payments."
    ),
    paths(
        crate::server::controller::health::root,
        crate::server::controller::loan::get_loans,
        crate::server::controller::loan::create_loan,
        crate::server::controller::loan::get_loan,
        crate::server::controller::loan::update_loan,
        crate::server::controller::loan::delete_loan,
        crate::server::controller::user::upsert_user,
        crate::server::controller::user::get_all_users,
        crate::server::controller::user::get_user,
        crate::server::controller::user::get_user_role,
        crate::server::controller::user::set_user_role,
        crate::server::controller::loan_application::apply_loan,
        crate::server::controller::loan_application::get_all_applications,
        crate::server::controller::loan_application::get_user_applications,
        crate::server::controller::loan_application::get_pending_applications,
        crate::server::controller::loan_application::cancel_application,
        crate::server::controller::payment::create_payment_intent,
    ),
    components(schemas(
        ErrorDto,
        InsertOneResultDto,
        UpdateResultDto,
        DeleteResultDto,
        LoanInputDto,
        LoanDto,
        ApplyLoanDto,
        LoanApplicationDto,
        CreatePaymentIntentDto,
        PaymentIntentDto,
        UpsertUserDto,
        UserDto,
        UserRoleDto,
        SetRoleDto,
    )),
    tags(
        (name = "health", description = "Liveness and API documentation"),
        (name = "loan", description = "Loan catalog"),
        (name = "user", description = "Users and roles"),
        (name = "application", description = "Loan applications"),
        (name = "payment", description = "Application fee payments")
    )
)]
pub struct ApiDoc;
