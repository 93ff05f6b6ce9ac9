use gcounsel_select::consequences::SO_TERMS;

pub fn run_consequences() {
    for term in SO_TERMS {
        println!("{term}");
    }
}
