use soroban_sdk::{symbol_short, Address, Env};

/// Emit an initialization event
/// Topics: ("init",)
/// Data: (owner, token_a, token_b)
pub fn emit_initialized(env: &Env, owner: &Address, token_a: &Address, token_b: &Address) {
    let topics = (symbol_short!("init"),);
    let data = (owner.clone(), token_a.clone(), token_b.clone());
    env.events().publish(topics, data);
}

/// Emit a deposit event
/// Topics: ("deposit", token)
/// Data: amount
pub fn emit_deposit(env: &Env, token: &Address, amount: i128) {
    let topics = (symbol_short!("deposit"), token.clone());
    env.events().publish(topics, amount);
}

/// Emit a withdraw event
/// Topics: ("withdraw", token)
/// Data: amount
pub fn emit_withdraw(env: &Env, token: &Address, amount: i128) {
    let topics = (symbol_short!("withdraw"), token.clone());
    env.events().publish(topics, amount);
}

/// Emit a convert event
/// Topics: ("convert", user)
/// Data: (input_token, amount)
pub fn emit_convert(env: &Env, user: &Address, input_token: &Address, amount: i128) {
    let topics = (symbol_short!("convert"), user.clone());
    let data = (input_token.clone(), amount);
    env.events().publish(topics, data);
}

/// Emit a directionality toggle event
/// Topics: ("toggle",)
/// Data: new_state
pub fn emit_toggle_bidirectional(env: &Env, bidirectional: bool) {
    let topics = (symbol_short!("toggle"),);
    env.events().publish(topics, bidirectional);
}

/// Emit an ownership transfer event
/// Topics: ("owner", previous_owner)
/// Data: new_owner
pub fn emit_ownership_transferred(env: &Env, previous_owner: &Address, new_owner: &Address) {
    let topics = (symbol_short!("owner"), previous_owner.clone());
    env.events().publish(topics, new_owner.clone());
}
