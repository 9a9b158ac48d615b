/// Given a pair and one of its members, returns the other member.  For a pair
/// whose members are equal, returns that member.  Returns `None` if `value`
/// is not in the pair.
pub fn other_value<T: Eq>((first, second): (T, T), value: &T) -> Option<T> {
    if first == *value {
        Some(second)
    } else if second == *value {
        Some(first)
    } else {
        None
    }
}
