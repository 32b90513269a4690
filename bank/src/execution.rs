use common_constants::NEW_POSITION_ID;
use common_errors::*;
use common_structs::{ExecutionContext, Position};

use crate::storage;

multiversx_sc::imports!();

/// Holds the execution slot for one `execute` call and releases it when dropped.
pub struct ExecutionScope<'a, C>
where
    C: storage::Storage,
{
    sc_ref: &'a C,
    pub context: ExecutionContext<C::Api>,
}

impl<'a, C> ExecutionScope<'a, C>
where
    C: storage::Storage,
{
    fn open(sc_ref: &'a C, context: ExecutionContext<C::Api>) -> Self {
        sc_ref.execution_context().set(&context);
        ExecutionScope { sc_ref, context }
    }
}

impl<C> Drop for ExecutionScope<'_, C>
where
    C: storage::Storage,
{
    fn drop(&mut self) {
        self.sc_ref.execution_context().clear();
    }
}

#[multiversx_sc::module]
pub trait ExecutionModule: storage::Storage {
    /// Resolves the position an `execute` call operates on.
    /// Position id `0` opens a new empty position owned by `caller`.
    ///
    /// # Errors
    /// - `ERROR_BAD_POSITION`: If `position_id` was never allocated.
    /// - `ERROR_NOT_FROM_OWNER`: If `caller` does not own the position.
    fn resolve_position(&self, position_id: u64, caller: &ManagedAddress) -> u64 {
        if position_id == NEW_POSITION_ID {
            let new_id = self.next_position_id().get();
            self.next_position_id().set(new_id + 1);
            self.positions(new_id).set(Position::new(caller.clone()));
            return new_id;
        }

        require!(
            position_id < self.next_position_id().get(),
            ERROR_BAD_POSITION
        );
        let position = self.positions(position_id).get();
        require!(&position.owner == caller, ERROR_NOT_FROM_OWNER);

        position_id
    }

    /// Opens the execution slot for `position_id` driven by `spell`.
    ///
    /// # Errors
    /// - `ERROR_ALREADY_IN_EXECUTION`: If another execution is still open.
    fn begin_execution(&self, position_id: u64, spell: &ManagedAddress) -> ExecutionScope<Self> {
        require!(
            self.execution_context().is_empty(),
            ERROR_ALREADY_IN_EXECUTION
        );

        ExecutionScope::open(
            self,
            ExecutionContext {
                position_id,
                spell: spell.clone(),
            },
        )
    }

    /// Context of the running execution; the caller must be its spell.
    ///
    /// # Errors
    /// - `ERROR_NOT_IN_EXEC`: If no execution is open.
    /// - `ERROR_NOT_FROM_SPELL`: If the caller is not the executing spell.
    fn require_in_execution(&self) -> ExecutionContext<Self::Api> {
        let mapper = self.execution_context();
        require!(!mapper.is_empty(), ERROR_NOT_IN_EXEC);

        let context = mapper.get();
        require!(
            self.blockchain().get_caller() == context.spell,
            ERROR_NOT_FROM_SPELL
        );
        context
    }
}
