//! The Adaptive Accounts operation catalog.
//!
//! Every entry is a pass-through: a fixed endpoint path, no local
//! validation, no response post-processing.

/// An Adaptive Accounts operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operation {
    CreateAccount,
    AddBankAccount,
    AddPaymentCard,
    CheckComplianceStatus,
    UpdateComplianceStatus,
    GetUserAgreement,
    GetVerifiedStatus,
    SetFundingSourceConfirmed,
}

impl Operation {
    /// Every operation in the catalog.
    pub const ALL: [Operation; 8] = [
        Operation::CreateAccount,
        Operation::AddBankAccount,
        Operation::AddPaymentCard,
        Operation::CheckComplianceStatus,
        Operation::UpdateComplianceStatus,
        Operation::GetUserAgreement,
        Operation::GetVerifiedStatus,
        Operation::SetFundingSourceConfirmed,
    ];

    /// The remote endpoint path for this operation.
    pub fn path(self) -> &'static str {
        match self {
            Operation::CreateAccount => "AdaptiveAccounts/CreateAccount",
            Operation::AddBankAccount => "AdaptiveAccounts/AddBankAccount",
            Operation::AddPaymentCard => "AdaptiveAccounts/AddPaymentCard",
            Operation::CheckComplianceStatus => "AdaptiveAccounts/CheckComplianceStatus",
            Operation::UpdateComplianceStatus => "AdaptiveAccounts/UpdateComplianceStatus",
            Operation::GetUserAgreement => "AdaptiveAccounts/GetUserAgreement",
            Operation::GetVerifiedStatus => "AdaptiveAccounts/GetVerifiedStatus",
            Operation::SetFundingSourceConfirmed => "AdaptiveAccounts/SetFundingSourceConfirmed",
        }
    }
}
