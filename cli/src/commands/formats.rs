use hostexpand_common::error::HOST_FORMATS;

use crate::terminal::print;

pub fn formats() {
    print::header("host formats");
    // The first line of the reference is the "nothing resolved" headline.
    for line in HOST_FORMATS.lines().skip(1) {
        print::line(line);
    }
}
