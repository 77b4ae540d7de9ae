//! Appending several sources onto one list

/// Append every element of every list in `others` onto `dest`, in order
pub fn combine<T, L>(dest: &mut Vec<T>, others: impl IntoIterator<Item = L>)
where
    L: IntoIterator<Item = T>,
{
    for other in others {
        dest.extend(other);
    }
}

/// Append `items` onto `dest`, in order
pub fn add_many<T>(dest: &mut Vec<T>, items: impl IntoIterator<Item = T>) {
    dest.extend(items);
}

/// Pure variant of [`combine`]: a new list holding `first` followed by `others`
pub fn combined<T, L>(first: impl IntoIterator<Item = T>, others: impl IntoIterator<Item = L>) -> Vec<T>
where
    L: IntoIterator<Item = T>,
{
    let mut result: Vec<T> = first.into_iter().collect();
    combine(&mut result, others);
    result
}

/// [`combine`] and [`add_many`] as methods on `Vec`
pub trait ListExt<T> {
    /// See [`combine`]
    fn combine<L: IntoIterator<Item = T>>(&mut self, others: impl IntoIterator<Item = L>);

    /// See [`add_many`]
    fn add_many(&mut self, items: impl IntoIterator<Item = T>);
}

impl<T> ListExt<T> for Vec<T> {
    fn combine<L: IntoIterator<Item = T>>(&mut self, others: impl IntoIterator<Item = L>) {
        combine(self, others);
    }

    fn add_many(&mut self, items: impl IntoIterator<Item = T>) {
        add_many(self, items);
    }
}
