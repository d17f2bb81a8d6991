#![no_std]

use soroban_sdk::contracterror;

/// @title  ErrorCategory
/// @notice Groups timelock errors by the check that produced them.
/// @dev    Off-chain consumers should switch on this value first, then on the
///         specific `TimelockError` code for fine-grained handling.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ErrorCategory {
    /// Contract setup errors (codes 1-99).
    Initialization,
    /// Caller identity errors (codes 100-199).
    Authorization,
    /// ETA and grace-window errors (codes 200-299).
    Scheduling,
    /// Queue membership and descriptor errors (codes 300-399).
    Transaction,
    /// Errors raised while forwarding the queued call (codes 400-499).
    Call,
    /// Delay bound errors (codes 500-599).
    Configuration,
    /// Safe-math errors (codes 700-799).
    Arithmetic,
}

/// @title  TimelockError
/// @notice Error enum returned by every fallible timelock entry point.
/// @dev    Codes are wire-stable. Never renumber a variant after deployment.
///         Append new variants at the end of their category block only.
///
/// Error Code Layout:
///   1  -  99  : Initialization
///   100 - 199 : Authorization
///   200 - 299 : Scheduling
///   300 - 399 : Transaction
///   400 - 499 : Call
///   500 - 599 : Configuration
///   700 - 799 : Arithmetic
#[contracterror]
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
#[repr(u32)]
pub enum TimelockError {
    // --- Initialization (1-99) ---
    /// `initialize` has not been called yet.
    NotInitialized = 1,

    /// `initialize` was already called.
    AlreadyInitialized = 2,

    // --- Authorization (100-199) ---
    /// Caller is not the admin.
    NotAdmin = 100,

    /// Caller is not the pending admin, or no admin handover is in progress.
    NotPendingAdmin = 101,

    /// A self-call-only entry point was invoked by an address other than the
    /// timelock itself.
    NotSelf = 102,

    // --- Scheduling (200-299) ---
    /// ETA is earlier than `now + delay` at queue time.
    EtaTooSoon = 200,

    /// Execution attempted before the ETA.
    TransactionLocked = 201,

    /// Execution attempted after `eta + GRACE_PERIOD`.
    TransactionStale = 202,

    // --- Transaction (300-399) ---
    /// No pending entry matches the supplied descriptor.
    TransactionNotQueued = 300,

    /// The identical descriptor is already pending.
    TransactionAlreadyQueued = 301,

    /// Native value must be non-negative.
    InvalidValue = 302,

    /// The call payload cannot be turned into a function name and arguments.
    InvalidCallData = 303,

    // --- Call (400-499) ---
    /// The target contract failed while executing the forwarded call.
    CallReverted = 400,

    /// The timelock does not hold enough native token to forward `value`.
    InsufficientValue = 401,

    /// A queued self-call names a function the timelock does not expose to
    /// its own queue.
    UnsupportedSelfCall = 402,

    // --- Configuration (500-599) ---
    /// Delay is below `MINIMUM_DELAY`.
    DelayBelowMinimum = 500,

    /// Delay is above `MAXIMUM_DELAY`.
    DelayAboveMaximum = 501,

    // --- Arithmetic (700-799) ---
    /// Timestamp arithmetic overflowed.
    Overflow = 700,
}

/// @title  ErrorExt
/// @notice Provides category() and description() on every TimelockError variant.
/// @dev    Use this for monitoring and off-chain display.
pub trait ErrorExt {
    /// @return The ErrorCategory bucket this error belongs to.
    fn category(&self) -> ErrorCategory;

    /// @return A static string description safe for logging or display.
    fn description(&self) -> &'static str;
}

impl ErrorExt for TimelockError {
    fn category(&self) -> ErrorCategory {
        match self {
            TimelockError::NotInitialized | TimelockError::AlreadyInitialized => {
                ErrorCategory::Initialization
            }

            TimelockError::NotAdmin | TimelockError::NotPendingAdmin | TimelockError::NotSelf => {
                ErrorCategory::Authorization
            }

            TimelockError::EtaTooSoon
            | TimelockError::TransactionLocked
            | TimelockError::TransactionStale => ErrorCategory::Scheduling,

            TimelockError::TransactionNotQueued
            | TimelockError::TransactionAlreadyQueued
            | TimelockError::InvalidValue
            | TimelockError::InvalidCallData => ErrorCategory::Transaction,

            TimelockError::CallReverted
            | TimelockError::InsufficientValue
            | TimelockError::UnsupportedSelfCall => ErrorCategory::Call,

            TimelockError::DelayBelowMinimum | TimelockError::DelayAboveMaximum => {
                ErrorCategory::Configuration
            }

            TimelockError::Overflow => ErrorCategory::Arithmetic,
        }
    }

    fn description(&self) -> &'static str {
        match self {
            TimelockError::NotInitialized => "Timelock has not been initialized",
            TimelockError::AlreadyInitialized => "Timelock has already been initialized",
            TimelockError::NotAdmin => "Call must come from admin",
            TimelockError::NotPendingAdmin => "Call must come from pending admin",
            TimelockError::NotSelf => "Call must come from the timelock itself",
            TimelockError::EtaTooSoon => "Estimated execution time must satisfy delay",
            TimelockError::TransactionLocked => "Transaction hasn't surpassed time lock",
            TimelockError::TransactionStale => "Transaction is stale",
            TimelockError::TransactionNotQueued => "Transaction hasn't been queued",
            TimelockError::TransactionAlreadyQueued => "Transaction is already queued",
            TimelockError::InvalidValue => "Value must be non-negative",
            TimelockError::InvalidCallData => "Call data does not start with a function name",
            TimelockError::CallReverted => "Transaction execution reverted",
            TimelockError::InsufficientValue => "Timelock balance is insufficient for value",
            TimelockError::UnsupportedSelfCall => "Function is not callable through the queue",
            TimelockError::DelayBelowMinimum => "Delay must exceed minimum delay",
            TimelockError::DelayAboveMaximum => "Delay must not exceed maximum delay",
            TimelockError::Overflow => "Integer overflow in timestamp arithmetic",
        }
    }
}
