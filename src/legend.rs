/// A plotting surface that can report the handles and labels of its legend
pub trait LegendSource {
    type Handle;

    fn legend_handles_labels(&self) -> (Vec<Self::Handle>, Vec<String>);
}

/// Sort legend entries by label.
///
/// Each handle stays with its label. Entries with equal labels keep their
/// plotting order. If there are more handles than labels (or the reverse)
/// the extras are dropped.
///
/// # Returns
/// * `(sorted_handles, sorted_labels)`
pub fn sort_labels<S>(ax: &S) -> (Vec<S::Handle>, Vec<String>)
where
    S: LegendSource + ?Sized,
{
    let (legend_handles, legend_labels) = ax.legend_handles_labels();

    let mut sorted_pairs: Vec<(String, S::Handle)> =
        legend_labels.into_iter().zip(legend_handles).collect();
    sorted_pairs.sort_by(|a, b| a.0.cmp(&b.0));

    let (sorted_labels, sorted_handles): (Vec<String>, Vec<S::Handle>) =
        sorted_pairs.into_iter().unzip();
    (sorted_handles, sorted_labels)
}
