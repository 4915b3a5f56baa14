#[cfg(test)]
pub const POST_ALPHA: &str = "---
title: Alpha
date: 2024-01-01
description: First post
---

Alpha body text.

Second paragraph of the alpha post.
";

#[cfg(test)]
pub const POST_BETA: &str = "---
title: Beta
date: 2024-02-01
---

Beta body text.
";

#[cfg(test)]
pub const POST_MISSING_DATE: &str = "---
title: No Date Here
description: This one should be dropped
---

Body of a post without a date.
";

#[cfg(test)]
pub const PROJECT_RAYTRACER: &str = "---
title: Weekend Raytracer
date: 2023-11-20
description: A path tracer written over a long weekend
language: Rust
repo: https://github.com/jmoray/raytracer
---

Spheres, triangles and a lot of dot products.
";
