mod checkout_is_rejected_without_changes;
