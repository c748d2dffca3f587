pub use super::loan::Entity as Loan;
pub use super::loan_application::Entity as LoanApplication;
pub use super::user::Entity as User;
