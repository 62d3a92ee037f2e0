use super::layout;
use crate::middleware::flash::Flashes;

pub fn login(flashes: &Flashes) -> String {
    layout(
        "Login",
        None,
        flashes,
        r#"<form method="post" action="/login">
<label>Username <input name="username" required></label>
<label>Password <input name="password" type="password" required></label>
<button type="submit">Log in</button>
</form>
<p>No account yet? <a href="/register">Register</a></p>"#,
    )
}

pub fn register(flashes: &Flashes) -> String {
    layout(
        "Register",
        None,
        flashes,
        r#"<form method="post" action="/register">
<label>Username <input name="username" maxlength="64" required></label>
<label>Email <input name="email" type="email" maxlength="120" required></label>
<label>Password <input name="password" type="password" required></label>
<label>Confirm password <input name="confirm_password" type="password" required></label>
<label>Role
<select name="role" required>
<option value="student">Student</option>
<option value="professor">Professor</option>
</select>
</label>
<button type="submit">Register</button>
</form>
<p>Already registered? <a href="/login">Log in</a></p>"#,
    )
}
